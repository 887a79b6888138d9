/// Numeric conversion helpers.
///
/// This module provides the lenient text-to-number conversion used by both
/// scanners. Conversions here never fail: malformed literals degrade to the
/// value of their longest valid prefix.
pub mod num;
