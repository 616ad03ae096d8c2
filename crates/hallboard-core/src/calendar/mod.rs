//! Gregorian to Hijri calendar conversion
//!
//! The conversion goes through a Julian Day Number and then applies the civil
//! tabular Hijri algorithm (30-year cycles of 10631 days). The result is an
//! arithmetic approximation of the Islamic calendar: it can differ from the
//! locally sighted date by a day or more around month boundaries.

mod hijri;
mod julian;

pub use hijri::{jdn_to_hijri, to_hijri, HijriDate, HIJRI_MONTHS};
pub use julian::{gregorian_to_jdn, GregorianDate};
