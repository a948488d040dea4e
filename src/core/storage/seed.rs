//! Portfolio entries present when the server starts

use crate::core::models::NewPortfolioItem;

pub(crate) fn portfolio_items() -> Vec<NewPortfolioItem> {
    vec![
        NewPortfolioItem::new(
            "Creative Photography",
            "Professional photography showcasing creative composition and lighting techniques",
            "https://bhimshahi.com.np/portfolio1.jpeg",
            "photography",
        )
        .with_tags(["Photography", "Creative"]),
        NewPortfolioItem::new(
            "Artistic Vision",
            "Demonstrating artistic vision through carefully composed photographic work",
            "https://bhimshahi.com.np/portfolio2.jpeg",
            "photography",
        )
        .with_tags(["Photography", "Artistic"]),
        NewPortfolioItem::new(
            "Video Production",
            "Professional video editing and post-production work for various clients",
            "https://images.unsplash.com/photo-1574717024653-61fd2cf4d44d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
            "video",
        )
        .with_tags(["Video", "Editing"]),
        NewPortfolioItem::new(
            "Graphic Design",
            "Creative graphic design solutions for branding and visual communication",
            "https://images.unsplash.com/photo-1561070791-2526d30994b5?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
            "design",
        )
        .with_tags(["Design", "Branding"]),
    ]
}
