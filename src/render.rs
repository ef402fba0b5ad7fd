//! Plain-text markup for the views.

use crate::models::Property;
use crate::views::{ListingState, OwnerListingsView, TeamShowcase};
use std::fmt::Write;

/// Shortest form: `450`, `12.5`
fn format_price(price: f64) -> String {
    price.to_string()
}

pub fn render_owner_listings(view: &OwnerListingsView) -> String {
    let load_failed = match view.state() {
        ListingState::Loading => return "Loading...\n".to_string(),
        ListingState::Ready { load_failed } => load_failed,
    };

    let properties = view.properties();
    let mut out = String::new();
    let _ = writeln!(out, "Your winner all properties");
    let _ = writeln!(out, "Total Property: {}", properties.len());
    if load_failed {
        let _ = writeln!(out, "(properties could not be loaded)");
    }

    for property in &properties {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}  ${}k", property.name, format_price(property.price));
        let _ = writeln!(out, "  {}", property.location);
        if !property.image.is_empty() {
            let _ = writeln!(out, "  {}", property.image);
        }
        let _ = writeln!(out, "  id: {}", property.id);
    }
    out
}

/// Empty result sets render nothing
pub fn render_search_results(results: &[Property]) -> String {
    if results.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Search Results: {}", results.len());
    for property in results {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", property.name);
        let _ = writeln!(out, "  {}", property.location);
        let _ = writeln!(out, "  ${}", format_price(property.price));
        let _ = writeln!(out, "  View Details: {}", property.detail_path());
    }
    out
}

pub fn render_team(team: &TeamShowcase) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Our team");
    let _ = writeln!(out, "Discover the Faces Behind Our Success");
    for image in team.images() {
        let _ = writeln!(out, "  {}", image);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;

    fn villa() -> Property {
        Property {
            id: "p1".to_string(),
            owner_id: Some(UserId::new("u1")),
            name: "Sunset Villa".to_string(),
            location: "Austin".to_string(),
            price: 450.0,
            image: String::new(),
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(450.0), "450");
        assert_eq!(format_price(12.5), "12.5");
        assert_eq!(format_price(1250.75), "1250.75");
    }

    #[test]
    fn test_search_results_include_detail_link() {
        let out = render_search_results(&[villa()]);
        assert!(out.starts_with("Search Results: 1\n"));
        assert!(out.contains("Sunset Villa"));
        assert!(out.contains("$450"));
        assert!(out.contains("/propertyDetails/p1"));
    }

    #[test]
    fn test_empty_search_renders_nothing() {
        assert!(render_search_results(&[]).is_empty());
    }

    #[test]
    fn test_team_lists_every_image() {
        let out = render_team(&TeamShowcase);
        assert_eq!(out.lines().filter(|l| l.contains("https://")).count(), 3);
    }
}
