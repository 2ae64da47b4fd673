//! Service layer modules for external integrations.
//!
//! Contains the Supabase client and the listing reads built on top of it.

pub mod listings;
pub mod supabase;

pub use listings::Listings;
pub use supabase::{SupabaseClient, SupabaseError};
