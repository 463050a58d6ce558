//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use franemm_core::Slug;

use crate::error::{AppError, Result};
use crate::filters;
use crate::site::SiteChrome;
use crate::state::AppState;

use super::products::ProductCardView;

// =============================================================================
// Hero Carousel Configuration (static content)
// =============================================================================

/// A single slide in the hero carousel.
#[derive(Clone)]
pub struct CarouselSlide {
    pub image_path: &'static str,
    pub image_alt: &'static str,
}

/// Hero carousel configuration.
///
/// The carousel owns a single auto-advance timer; manual navigation cancels
/// and reschedules it (see `static/js/carousel.js`).
#[derive(Clone)]
pub struct CarouselConfig {
    pub slides: &'static [CarouselSlide],
    pub interval_ms: u32,
}

const CAROUSEL_SLIDES: &[CarouselSlide] = &[
    CarouselSlide {
        image_path: "/static/images/hero-wave-1.jpg",
        image_alt: "Franemm skincare products on a bathroom shelf",
    },
    CarouselSlide {
        image_path: "/static/images/hero-wave-2.jpg",
        image_alt: "Lather from a Franemm facial cleanser",
    },
    CarouselSlide {
        image_path: "/static/images/hero-wave-3.jpg",
        image_alt: "A family using Franemm bath products",
    },
];

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slides: CAROUSEL_SLIDES,
            interval_ms: 5000,
        }
    }
}

// =============================================================================
// Category Buckets
// =============================================================================

/// The category shelves shown on the home page, in display order.
const CATEGORY_SECTIONS: &[(&str, &str)] = &[
    ("Lotion & Gel", "lotion"),
    ("Facial Cleanser", "facial-cleanser"),
    ("Bath & Laundry", "bath-and-laundry"),
    ("Kids Products", "kids-products"),
    ("Hair Products", "hair-product"),
];

/// Products shown per category shelf.
const PRODUCTS_PER_SECTION: usize = 6;

/// Products shown in the featured and available-now strips.
const PRODUCTS_PER_STRIP: usize = 4;

/// One rendered category shelf.
#[derive(Clone)]
pub struct CategorySectionView {
    pub title: &'static str,
    pub slug: &'static str,
    pub products: Vec<ProductCardView>,
}

// =============================================================================
// Template
// =============================================================================

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub site: SiteChrome,
    pub carousel: CarouselConfig,
    pub featured_products: Vec<ProductCardView>,
    pub available_now: Vec<ProductCardView>,
    pub sections: Vec<CategorySectionView>,
}

// =============================================================================
// Handler
// =============================================================================

/// Display the home page.
///
/// All shelves are fetched concurrently and joined; a failing fetch fails
/// the whole view - there is no per-shelf fallback.
///
/// # Errors
///
/// Renders the error panel if any content-store query fails.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<HomeTemplate> {
    let content = state.content();

    let section_slug = |slug: &'static str| -> Result<Slug> {
        Slug::parse(slug).map_err(|e| AppError::internal(format!("bad section slug {slug}: {e}")))
    };

    let (lotion_slug, facial_slug, bath_slug, kids_slug, hair_slug) = (
        section_slug("lotion")?,
        section_slug("facial-cleanser")?,
        section_slug("bath-and-laundry")?,
        section_slug("kids-products")?,
        section_slug("hair-product")?,
    );

    let (featured, available, lotion, facial, bath, kids, hair) = tokio::try_join!(
        content.get_featured_products(),
        content.get_products_by_availability(true),
        content.get_products_by_category(&lotion_slug),
        content.get_products_by_category(&facial_slug),
        content.get_products_by_category(&bath_slug),
        content.get_products_by_category(&kids_slug),
        content.get_products_by_category(&hair_slug),
    )?;

    let cards = |products: &[crate::content::types::ProductDocument], limit: usize| {
        products
            .iter()
            .take(limit)
            .map(ProductCardView::from)
            .collect::<Vec<_>>()
    };

    let sections = CATEGORY_SECTIONS
        .iter()
        .zip([&lotion, &facial, &bath, &kids, &hair])
        .map(|(&(title, slug), products)| CategorySectionView {
            title,
            slug,
            products: cards(products, PRODUCTS_PER_SECTION),
        })
        .collect();

    Ok(HomeTemplate {
        site: SiteChrome::default(),
        carousel: CarouselConfig::default(),
        featured_products: cards(&featured, PRODUCTS_PER_STRIP),
        available_now: cards(&available, PRODUCTS_PER_STRIP),
        sections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_defaults() {
        let carousel = CarouselConfig::default();
        assert_eq!(carousel.interval_ms, 5000);
        assert!(carousel.slides.len() >= 2, "carousel needs slides to rotate");
    }

    #[test]
    fn test_section_slugs_are_valid() {
        for (_, slug) in CATEGORY_SECTIONS {
            assert!(Slug::parse(slug).is_ok(), "{slug} should be a valid slug");
        }
    }

    #[test]
    fn test_sections_match_site_chrome_links() {
        // The home shelves and the footer category links stay in sync
        let chrome = SiteChrome::default();
        for (_, slug) in CATEGORY_SECTIONS {
            assert!(
                chrome
                    .category_links
                    .iter()
                    .any(|l| l.href == format!("/category/{slug}")),
                "no chrome link for section {slug}"
            );
        }
    }
}
