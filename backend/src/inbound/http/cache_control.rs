//! Shared cache-control policies for HTTP handlers.

/// Per-user responses must always be revalidated before reuse.
pub const PRIVATE_NO_CACHE_MUST_REVALIDATE: &str = "private, no-cache, must-revalidate";

/// Catalogue reads may be reused briefly; review aggregates lag by at most this long.
pub const PUBLIC_SHORT_LIVED: &str = "public, max-age=60";

/// Header tuple for responses scoped to the signed-in user.
pub const fn private_no_cache_header() -> (&'static str, &'static str) {
    ("Cache-Control", PRIVATE_NO_CACHE_MUST_REVALIDATE)
}

/// Header tuple for public catalogue responses.
pub const fn public_catalogue_header() -> (&'static str, &'static str) {
    ("Cache-Control", PUBLIC_SHORT_LIVED)
}
