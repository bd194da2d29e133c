//! Port definitions: trait seams between the application and the outside
//! world.

pub mod outbound;
