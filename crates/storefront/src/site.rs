//! Site chrome configuration.
//!
//! One canonical header/footer pair, parameterized by this structure instead
//! of literals repeated per screen. Every page template carries a
//! [`SiteChrome`] so the shared partials can render from it.

/// A labelled internal or external link.
#[derive(Clone)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// A social profile link with its icon name.
#[derive(Clone)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

/// Contact details shown in the footer and on the contact page.
#[derive(Clone)]
pub struct ContactDetails {
    pub phone: &'static str,
    pub address: &'static str,
    pub email: &'static str,
}

/// Everything the shared header and footer render from.
#[derive(Clone)]
pub struct SiteChrome {
    pub brand: &'static str,
    pub nav_links: &'static [NavLink],
    pub category_links: &'static [NavLink],
    pub information_links: &'static [NavLink],
    pub social_links: &'static [SocialLink],
    pub contact: ContactDetails,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink {
        name: "Home",
        href: "/",
    },
    NavLink {
        name: "About Us",
        href: "/about",
    },
    NavLink {
        name: "Blog",
        href: "/blog",
    },
    NavLink {
        name: "Contact Us",
        href: "/contact",
    },
];

const CATEGORY_LINKS: &[NavLink] = &[
    NavLink {
        name: "Facial Cleanser",
        href: "/category/facial-cleanser",
    },
    NavLink {
        name: "Bath & Laundry",
        href: "/category/bath-and-laundry",
    },
    NavLink {
        name: "Lotion & Gel",
        href: "/category/lotion",
    },
    NavLink {
        name: "Hair Products",
        href: "/category/hair-product",
    },
    NavLink {
        name: "Kids Products",
        href: "/category/kids-products",
    },
];

const INFORMATION_LINKS: &[NavLink] = &[
    NavLink {
        name: "FAQ",
        href: "/about",
    },
    NavLink {
        name: "Privacy Policy",
        href: "/about",
    },
    NavLink {
        name: "Terms & Condition",
        href: "/about",
    },
    NavLink {
        name: "Contact Us",
        href: "/contact",
    },
];

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "Facebook",
        href: "https://facebook.com/franemmindustries",
        icon: "facebook",
    },
    SocialLink {
        name: "Instagram",
        href: "https://instagram.com/franemmindustries",
        icon: "instagram",
    },
    SocialLink {
        name: "X",
        href: "https://x.com/franemmind",
        icon: "x",
    },
];

impl Default for SiteChrome {
    fn default() -> Self {
        Self {
            brand: "Franemm Industries",
            nav_links: NAV_LINKS,
            category_links: CATEGORY_LINKS,
            information_links: INFORMATION_LINKS,
            social_links: SOCIAL_LINKS,
            contact: ContactDetails {
                phone: "09087876332",
                address: "Plot 9-13 Western Avenue, River view Estate, Ibadan Expressway, Isheri, Ogun State, Nigeria.",
                email: "hello@franemmindustriesltd.com",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_cover_the_top_level_screens() {
        let chrome = SiteChrome::default();
        let hrefs: Vec<&str> = chrome.nav_links.iter().map(|l| l.href).collect();
        assert_eq!(hrefs, vec!["/", "/about", "/blog", "/contact"]);
    }

    #[test]
    fn test_category_links_point_at_category_routes() {
        let chrome = SiteChrome::default();
        assert!(
            chrome
                .category_links
                .iter()
                .all(|l| l.href.starts_with("/category/"))
        );
    }
}
