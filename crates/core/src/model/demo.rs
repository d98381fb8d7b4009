use super::types::{
    AnalyticsConfig, Background, Block, Profile, SiteData, VideoSummary, YoutubeMode,
};

/// Generates a small seeded site used by the CLI `demo` command and tests.
pub fn demo_site() -> SiteData {
    let profile = Profile::new("Jane Doe")
        .with_bio("Designer, maker of small useful things.")
        .with_background(Background::Color("#eef2ff".to_string()))
        .with_social_account("github", "janedoe")
        .with_social_account("x", "janedoe")
        .with_analytics(AnalyticsConfig {
            enabled: false,
            endpoint: String::new(),
            site_id: String::new(),
        });

    SiteData::new(profile)
        .with_block(
            Block::link("https://janedoe.dev", "Portfolio")
                .with_id("demo-portfolio")
                .with_subtext("Selected work")
                .with_span(3, 2)
                .at(1, 1)
                .with_background("mist"),
        )
        .with_block(
            Block::text("Now", "Building a tiny studio in Lisbon.")
                .with_id("demo-now")
                .with_span(3, 2)
                .at(4, 1)
                .with_background("paper"),
        )
        .with_block(
            Block::map("Lisbon, Portugal")
                .with_id("demo-map")
                .with_span(3, 2)
                .at(7, 1),
        )
        .with_block(
            Block::social("instagram", "janedoe")
                .with_id("demo-instagram")
                .with_span(2, 2)
                .at(1, 3),
        )
        .with_block(
            Block::youtube_feed("UCBa659QWEk1AI4Tg--mrJ2A", YoutubeMode::Grid)
                .with_id("demo-youtube")
                .with_span(4, 2)
                .at(3, 3)
                .with_channel_title("Jane makes things")
                .with_videos(vec![
                    VideoSummary::new(
                        "dQw4w9WgXcQ",
                        "Workshop tour",
                        "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg",
                    ),
                    VideoSummary::new(
                        "9bZkp7q19f0",
                        "Desk setup, one year later",
                        "https://i.ytimg.com/vi/9bZkp7q19f0/hqdefault.jpg",
                    ),
                ]),
        )
        .with_block(Block::spacer().with_id("demo-spacer").with_span(1, 2).at(7, 3))
        .with_block(
            Block::social_icon("bluesky", "janedoe.bsky.social")
                .with_id("demo-bluesky")
                .with_span(1, 1)
                .at(8, 3),
        )
}
