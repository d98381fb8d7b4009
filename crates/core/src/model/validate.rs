use std::collections::HashSet;

use super::error::ModelError;
use super::types::{BlockKind, SiteData};
use crate::layout::GRID_COLUMNS;
use crate::social;

/// Validates a site model before editing or publishing.
///
/// Returns the first problem found. Rendering never requires a valid model;
/// this exists so the CLI `check` command can surface mistakes that the
/// renderer would otherwise paper over (clamped spans, skipped platforms).
pub fn validate_site(site: &SiteData) -> Result<(), ModelError> {
    if site.profile.name.trim().is_empty() {
        return Err(ModelError::EmptyProfileName);
    }

    for account in &site.profile.social_accounts {
        if social::platform(&account.platform).is_none() {
            return Err(ModelError::UnknownPlatform(account.platform.clone()));
        }
    }

    let mut seen = HashSet::new();
    for block in &site.blocks {
        if !seen.insert(block.id.as_str()) {
            return Err(ModelError::DuplicateBlockId(block.id.clone()));
        }
        if block.col_span == 0 || block.row_span == 0 {
            return Err(ModelError::ZeroSpan(block.id.clone()));
        }
        if block.col_span > GRID_COLUMNS {
            return Err(ModelError::SpanTooWide {
                id: block.id.clone(),
                col_span: block.col_span,
                max: GRID_COLUMNS,
            });
        }
        if let BlockKind::Social {
            social_platform,
            youtube_mode: None,
            ..
        }
        | BlockKind::SocialIcon {
            social_platform, ..
        } = &block.kind
        {
            if social::platform(social_platform).is_none() {
                return Err(ModelError::UnknownPlatform(social_platform.clone()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::{Block, Profile};

    fn valid_site() -> SiteData {
        SiteData::new(Profile::new("Jane"))
            .with_block(Block::link("https://example.com", "Site").with_id("a"))
            .with_block(Block::social("github", "jane").with_id("b"))
    }

    #[test]
    fn test_valid_site_passes() {
        assert_eq!(validate_site(&valid_site()), Ok(()));
    }

    #[test]
    fn test_empty_profile_name_rejected() {
        let mut site = valid_site();
        site.profile.name = "   ".to_string();
        assert_eq!(validate_site(&site), Err(ModelError::EmptyProfileName));
    }

    #[test]
    fn test_duplicate_block_id_rejected() {
        let site = valid_site().with_block(Block::spacer().with_id("a"));
        assert_eq!(
            validate_site(&site),
            Err(ModelError::DuplicateBlockId("a".to_string()))
        );
    }

    #[test]
    fn test_zero_span_rejected() {
        let site = valid_site().with_block(Block::spacer().with_id("z").with_span(0, 1));
        assert_eq!(validate_site(&site), Err(ModelError::ZeroSpan("z".to_string())));
    }

    #[test]
    fn test_too_wide_span_rejected() {
        let site = valid_site().with_block(Block::spacer().with_id("w").with_span(12, 1));
        assert_eq!(
            validate_site(&site),
            Err(ModelError::SpanTooWide {
                id: "w".to_string(),
                col_span: 12,
                max: GRID_COLUMNS
            })
        );
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let site = valid_site().with_block(Block::social("myspace", "jane").with_id("m"));
        assert_eq!(
            validate_site(&site),
            Err(ModelError::UnknownPlatform("myspace".to_string()))
        );
    }
}
