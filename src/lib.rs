//! Content-aware image resizing by seam carving.
//!
//! A [`SeamCarver`] holds an image and repeatedly finds, and removes,
//! the connected path of pixels whose dual-gradient energy is lowest,
//! shrinking the image by one column or one row at a time.  Loading and
//! saving images, and deciding how many seams to take, is left to the
//! caller.

mod ternary;

pub mod error;
pub use error::{SeamDefect, SeamError};

pub mod view;
pub use view::GridView;

pub mod flipper;
pub mod lattice;

pub mod pixelgrid;
pub use pixelgrid::{Orientation, PixelGrid};

pub mod seam;
pub use seam::validate_seam;

pub mod energy;
pub use energy::{energy_map, energy_to_image, BORDER_ENERGY};

pub mod seamfinder;
pub use seamfinder::{SeamFinder, SeamPath};

pub mod seamcarver;
pub use seamcarver::SeamCarver;
