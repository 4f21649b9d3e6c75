/// One rich-result rule: the schema.org types that trigger it and the
/// properties the search engine gates the feature on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichResultRule {
    /// Stable feature key, e.g. `Product`.
    pub key: &'static str,
    /// Human-facing feature name, e.g. `Sitelinks Search Box`.
    pub name: &'static str,
    /// An entity matches when any of its declared types appears here.
    pub trigger_types: &'static [&'static str],
    /// Absent required properties block eligibility outright.
    pub required: &'static [&'static str],
    /// Absent recommended properties only lower confidence.
    pub recommended: &'static [&'static str],
}

/// Immutable rule table the engine evaluates against. Injected as a value so
/// tests can substitute a reduced or synthetic table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCatalog {
    rules: Vec<RichResultRule>,
}

impl RuleCatalog {
    pub fn custom(rules: Vec<RichResultRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[RichResultRule] {
        &self.rules
    }

    /// The supported rich-result features. Rule order is observable: it fixes
    /// the order of eligibility entries and of per-entity issues.
    pub fn standard() -> Self {
        Self::custom(vec![
            RichResultRule {
                key: "Article",
                name: "Article",
                trigger_types: &["Article", "NewsArticle", "BlogPosting"],
                required: &["headline", "image", "author", "datePublished"],
                recommended: &["dateModified", "publisher"],
            },
            RichResultRule {
                key: "Product",
                name: "Product",
                trigger_types: &["Product"],
                required: &["name", "image"],
                recommended: &["offers", "aggregateRating", "review", "brand"],
            },
            RichResultRule {
                key: "SoftwareApp",
                name: "Software App",
                trigger_types: &[
                    "SoftwareApplication",
                    "MobileApplication",
                    "WebApplication",
                ],
                required: &["name"],
                recommended: &[
                    "applicationCategory",
                    "operatingSystem",
                    "offers",
                    "aggregateRating",
                ],
            },
            RichResultRule {
                key: "LocalBusiness",
                name: "Local Business",
                trigger_types: &["LocalBusiness", "Restaurant", "Store"],
                required: &["name", "address"],
                recommended: &[
                    "telephone",
                    "openingHoursSpecification",
                    "geo",
                    "image",
                ],
            },
            RichResultRule {
                key: "Organization",
                name: "Organization",
                trigger_types: &["Organization", "Corporation"],
                required: &["name"],
                recommended: &["logo", "url", "sameAs", "contactPoint"],
            },
            RichResultRule {
                key: "FAQ",
                name: "FAQ",
                trigger_types: &["FAQPage"],
                required: &["mainEntity"],
                recommended: &[],
            },
            RichResultRule {
                key: "HowTo",
                name: "How-to",
                trigger_types: &["HowTo"],
                required: &["name", "step"],
                recommended: &["image", "totalTime", "estimatedCost"],
            },
            RichResultRule {
                key: "Review",
                name: "Review",
                trigger_types: &["Review"],
                required: &["itemReviewed", "reviewRating", "author"],
                recommended: &["reviewBody", "datePublished"],
            },
            RichResultRule {
                key: "BreadcrumbList",
                name: "Breadcrumb",
                trigger_types: &["BreadcrumbList"],
                required: &["itemListElement"],
                recommended: &[],
            },
            RichResultRule {
                key: "WebSite",
                name: "Sitelinks Search Box",
                trigger_types: &["WebSite"],
                required: &["url", "potentialAction"],
                recommended: &["name"],
            },
        ])
    }
}
