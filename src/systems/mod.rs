//! Animation controllers organized by page section.
//!
//! - `carousel`: the pinned feature-card carousel (progress to index
//!   mapping, heading dispatch, slide transition timeline)
//! - `hero`: hero intro timeline plus scroll-scrubbed parallax/showcase
//! - `pointer`: pointer-following decorative orb
//! - `platforms`: viewport-triggered reveal of the platforms section

pub mod carousel;
pub mod hero;
pub mod platforms;
pub mod pointer;

// Re-export commonly used items
pub use carousel::{index_for_progress, Carousel, CarouselConfig, HeadingExit};
pub use hero::{HeroIntro, HeroScrub};
pub use platforms::PlatformsReveal;
pub use pointer::follow_pointer;
