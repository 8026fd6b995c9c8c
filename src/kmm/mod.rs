//! Codec für das KMM-Dateiformat: versioniertes, delimiter-basiertes Binärformat.
//!
//! Eine KMM-Datei besteht aus einem Versions-Header, per `0xFE` getrennten
//! Sektionen (Stationen, Verbindungen, ab Version 2 auch Flüsse) und einem
//! festen Abspann. Felder innerhalb eines Datensatzes sind über die
//! Steuerbytes `0x00`–`0x04` getrennt; alle Zahlen stehen als dezimaler
//! UTF-8-Text im Pixel-Raum der Canvas zum Speicherzeitpunkt.

pub mod parser;
pub mod writer;

pub use parser::parse_kmm;
pub use writer::write_kmm;

/// Header einer Datei der Version 1 (noch ohne Fluss-Sektion).
pub(crate) const HEADER_V1: &[u8] = b"KMM.1\xfe";
/// Header der aktuellen Version 2.
pub(crate) const HEADER_V2: &[u8] = b"KMM.2\xfe";
/// Abspann am Dateiende.
pub(crate) const FOOTER: &[u8] = b"\xfeThank you for using KMetroMaker.\x04\x05";

/// Trennbyte zwischen den Sektionen.
pub(crate) const SECTION_SEP: u8 = 0xFE;
/// Historische Schreibweise des Sektions-Trenners; wird beim Lesen
/// auf [`SECTION_SEP`] normalisiert, beim Schreiben nie erzeugt.
pub(crate) const SECTION_SEP_LEGACY: u8 = 0xFF;

/// Datensatz-Ende in der Stations-Sektion.
pub(crate) const STATION_END: u8 = 0x03;
/// Datensatz-Ende in den Strecken-Sektionen (Verbindungen und Flüsse).
pub(crate) const STROKE_END: u8 = 0x04;
