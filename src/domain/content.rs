//! Static marketing copy for the site sections

use serde::Serialize;

pub const BRAND: &str = "Luxe Properties";

#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Navigation {
    pub brand: &'static str,
    pub links: Vec<Link>,
    pub call_to_action: Link,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub headline: &'static str,
    pub highlight: &'static str,
    pub subheading: &'static str,
    pub primary_action: Link,
    pub secondary_action: Link,
    pub search_placeholder: &'static str,
    pub search_action: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    /// Star rating, 1 to 5
    pub rating: u8,
    pub image_url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactDetails {
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub email: &'static str,
    pub email_href: &'static str,
    pub address: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Footer {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub quick_links: Vec<Link>,
    pub company_links: Vec<Link>,
    pub social_links: Vec<Link>,
    pub legal_links: Vec<Link>,
    pub copyright: &'static str,
}

/// A titled block of the home page
#[derive(Debug, Clone, Serialize)]
pub struct Section<T: Serialize> {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub content: T,
}

const fn link(label: &'static str, href: &'static str) -> Link {
    Link { label, href }
}

fn section_links() -> Vec<Link> {
    vec![
        link("Properties", "#properties"),
        link("Services", "#services"),
        link("Testimonials", "#testimonials"),
    ]
}

pub fn navigation() -> Navigation {
    Navigation {
        brand: BRAND,
        links: section_links(),
        call_to_action: link("Contact Us", "#contact"),
    }
}

pub fn hero() -> Hero {
    Hero {
        headline: "Find Your Dream Home",
        highlight: "Home",
        subheading:
            "Discover luxury properties in the most desirable locations. Your perfect property awaits.",
        primary_action: link("Explore Properties", "#properties"),
        secondary_action: link("Schedule Tour", "#contact"),
        search_placeholder: "Search by location, property type...",
        search_action: "/properties/search",
    }
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            icon: "home",
            title: "Property Search",
            description: "Advanced search tools to find properties matching your exact requirements and preferences.",
        },
        Service {
            icon: "dollar-sign",
            title: "Investment Consulting",
            description: "Expert guidance on real estate investment opportunities and market analysis.",
        },
        Service {
            icon: "file-check",
            title: "Legal Support",
            description: "Complete documentation and legal assistance throughout the transaction process.",
        },
        Service {
            icon: "users",
            title: "Personal Agents",
            description: "Dedicated agents to guide you through every step of your property journey.",
        },
        Service {
            icon: "zap",
            title: "Fast Closing",
            description: "Streamlined processes designed to close transactions quickly and efficiently.",
        },
        Service {
            icon: "shield",
            title: "Secure Transactions",
            description: "Fully protected transactions with escrow services and comprehensive safeguards.",
        },
    ]
}

pub fn services_section() -> Section<Vec<Service>> {
    Section {
        id: "services",
        title: "Our Services",
        subtitle: "Comprehensive real estate solutions tailored to meet your unique needs",
        content: services(),
    }
}

pub fn testimonials_section() -> Section<Vec<Testimonial>> {
    Section {
        id: "testimonials",
        title: "What Our Clients Say",
        subtitle: "Trusted by thousands of satisfied clients",
        content: testimonials(),
    }
}

pub fn contact_section() -> Section<ContactDetails> {
    Section {
        id: "contact",
        title: "Get In Touch",
        subtitle: "Have questions about our properties? Our dedicated team is ready to help you find your dream home.",
        content: contact_details(),
    }
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Sarah Anderson",
            role: "Home Buyer",
            content: "The entire process was seamless. The team guided me through every step and found exactly what I was looking for. Highly recommend!",
            rating: 5,
            image_url: "https://images.pexels.com/photos/34209/pexels-photo.jpg?auto=compress&cs=tinysrgb&w=200",
        },
        Testimonial {
            name: "Michael Chen",
            role: "Property Investor",
            content: "Outstanding market analysis and investment advice. This team truly understands the real estate market.",
            rating: 5,
            image_url: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=200",
        },
        Testimonial {
            name: "Emily Rodriguez",
            role: "Home Seller",
            content: "Sold my property faster than expected and for a great price. Professional, efficient, and caring service.",
            rating: 5,
            image_url: "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=200",
        },
    ]
}

pub fn contact_details() -> ContactDetails {
    ContactDetails {
        phone: "+1 (555) 123-4567",
        phone_href: "tel:+15551234567",
        email: "hello@luxeproperties.com",
        email_href: "mailto:hello@luxeproperties.com",
        address: "123 Luxury Avenue, Prime City, PC 12345",
    }
}

pub fn footer() -> Footer {
    let mut quick_links = section_links();
    quick_links.push(link("Contact", "#contact"));

    Footer {
        brand: BRAND,
        tagline: "Your trusted partner in finding luxury real estate properties.",
        quick_links,
        company_links: vec![
            link("About Us", "#"),
            link("Careers", "#"),
            link("Blog", "#"),
            link("Press", "#"),
        ],
        social_links: vec![
            link("Facebook", "#"),
            link("Twitter", "#"),
            link("Instagram", "#"),
            link("LinkedIn", "#"),
        ],
        legal_links: vec![
            link("Privacy Policy", "#"),
            link("Terms of Service", "#"),
            link("Cookie Policy", "#"),
        ],
        copyright: "© 2024 Luxe Properties. All rights reserved.",
    }
}
