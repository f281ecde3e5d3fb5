use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use crate::spatial_tree::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpatialError
{
    // the id was erased (or never belonged to this tree)
    InvalidHandle(ElementId),
}
impl Display for SpatialError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { Debug::fmt(self, f) }
}
impl Error for SpatialError { }
