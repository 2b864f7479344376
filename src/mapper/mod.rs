//! Coordinate mapping - raw input positions to canvas pixel coordinates
//!
//! Both mappers are pure functions of their inputs. An input outside the
//! paintable region maps to `None`; the state machine treats that as
//! "ignore" (Idle) or "implicit end of stroke" (Stroking).

mod screen;
mod surface;

pub use screen::ScreenRectMapper;
pub use surface::{SurfaceMapper, SurfaceMesh};
