pub use geometry_tests::*;

mod aabb;
pub use aabb::*;

mod rect;
pub use rect::*;

mod sphere;
pub use sphere::*;

mod circle;
pub use circle::*;

mod plane;
pub use plane::*;

mod frustum;
pub use frustum::*;

mod ray;
pub use ray::*;
