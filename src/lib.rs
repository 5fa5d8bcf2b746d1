//! Area of polygons drawn on a world map, in square meters.
//!
//! Vertices are projected into the UTM zone of the outer ring's centroid
//! and measured with the shoelace formula; holes are subtracted.
//!
//! ```rust,ignore
//! use polygon_area::{measure, GeoPoint, Polygon, Ring};
//!
//! let outer = Ring::new(vec![
//!     GeoPoint::new(40.0, -3.0),
//!     GeoPoint::new(40.0, -2.99),
//!     GeoPoint::new(40.01, -2.99),
//! ]);
//! let m = measure(&Polygon::new(outer, vec![]))?;
//! println!("{} ({})", m.label, m.area);
//! ```

pub mod area;
pub mod error;
pub mod label;
pub mod measure;
pub mod point;
pub mod polygon;
pub mod read_polygon;
pub mod records;
pub mod utm;
pub mod zone;

pub use error::{AreaError, Result};
pub use label::{format_area, LabelFormat};
pub use measure::{measure, measure_with, polygon_area, Measurement};
pub use point::{GeoPoint, PlanarPoint};
pub use polygon::{Polygon, Ring};
pub use records::{AreaRecord, AreaRecords};
pub use utm::{project, UtmProjection};
pub use zone::{select_zone, Hemisphere, Zone};
