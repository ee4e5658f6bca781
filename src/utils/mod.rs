//! Various geometrical operators shared by the queries.

pub use self::ccw_edge_normal::{ccw_edge_normal, in_plane_perp};
pub use self::orthogonal::{orthogonal_vector, project_on_plane};
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};

mod ccw_edge_normal;
mod orthogonal;
mod point_cloud_support_point;
