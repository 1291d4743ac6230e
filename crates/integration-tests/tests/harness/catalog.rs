//! Seed catalogs shared by the endpoint tests

use rnd_catalog::MemoryCatalog;
use rnd_core::LanguageId;

pub const EN: LanguageId = LanguageId::new(1);
pub const HR: LanguageId = LanguageId::new(2);

/// English and Croatian messages for the built-in errors plus a few custom ones
pub fn seeded() -> MemoryCatalog {
    MemoryCatalog::new()
        .with_entry("generic_err", EN, "Something went wrong")
        .with_entry("generic_err", HR, "Nešto je pošlo po zlu")
        .with_entry("record_not_found", EN, "Record not found")
        .with_entry("record_not_found", HR, "Zapis nije pronađen")
        .with_entry("unauthorized", EN, "Please sign in")
        .with_entry("invalid_email", EN, "Invalid email")
        .with_entry("name_too_long", EN, "Name %s is longer than %d characters")
}
