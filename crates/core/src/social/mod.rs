mod registry;

pub use registry::{infer_platform_from_url, platform, platforms, PlatformDescriptor};
