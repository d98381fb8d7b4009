mod demo;
mod error;
mod sorting;
mod types;
mod validate;

pub use demo::demo_site;
pub use error::ModelError;
pub use sorting::sort_blocks_for_document;
pub use types::{
    AnalyticsConfig, AvatarShape, AvatarStyle, Background, Block, BlockKind, MediaPosition,
    Profile, SiteData, SocialAccount, VideoSummary, YoutubeMode,
};
pub use validate::validate_site;
