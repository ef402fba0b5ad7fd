/// Headshots shown on the about page
pub const TEAM_IMAGES: [&str; 3] = [
    "https://www.corporatephotographerslondon.com/wp-content/uploads/2016/07/approachable-professional-headshots-London.jpg",
    "https://media.licdn.com/dms/image/v2/D4D12AQFUrM6o_8m-WQ/article-inline_image-shrink_1500_2232/article-inline_image-shrink_1500_2232/0/1705940547574?e=1730332800&v=beta&t=MlNxztddf7QhaANGuvOVSM15mDGa02gH4jYTkq2CViw",
    "https://r2.erweima.ai/imgcompressed/img/compressed_b4b0fe5f13483d0500a81c915929f106.webp",
];

/// Static team gallery, no fetching
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamShowcase;

impl TeamShowcase {
    pub fn images(&self) -> &'static [&'static str] {
        &TEAM_IMAGES
    }
}
