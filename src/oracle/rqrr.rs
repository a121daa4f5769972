//! In-process QR Code round trip through `rqrr`
//!
//! The module matrix is rendered to a grayscale image with a quiet zone and
//! scanned back. `rqrr` skips ECI designators and returns the raw segment
//! bytes, so the comparison is against the bytes actually encoded rather
//! than the input text. Kanji segments come back as their Shift JIS bytes,
//! so the segment headers are also read back from the scanned grid and
//! checked on their own.

use super::Mismatch;
use crate::config::HarnessConfig;
use crate::encoder::{EncodeRequest, ECI_KSX1001, ECI_UTF8};
use crate::ksx1001::utf8_to_euc_kr;
use crate::symbol::{InputMode, Symbol, Symbology};
use crate::{Error, Result};
use ::rqrr::{BitGrid, DeQRError, Grid, MetaData, RawData};
use image::{GrayImage, Luma};
use log::{debug, info};
use qrcode::bits::Bits;
use qrcode::canvas::is_functional;
use qrcode::ec::construct_codewords;
use qrcode::types::{Mode, QrError};
use qrcode::{EcLevel, Version};

const TOOL: &str = "rqrr";

/// Light modules around the symbol
pub const QUIET_ZONE: u32 = 4;
/// Pixels per module
pub const SCALE: u32 = 8;

/// Only full-size QR Code symbols can be scanned.
pub fn can_rqrr(index: usize, req: &EncodeRequest) -> bool {
    if req.symbology == Symbology::QrCode {
        return true;
    }
    info!("i:{index} {} not rqrr compatible", req.symbology);
    false
}

/// Render `symbol` black on white with a [`QUIET_ZONE`] border.
pub fn render(symbol: &Symbol) -> GrayImage {
    let (rows, width) = (symbol.rows() as u32, symbol.width() as u32);
    GrayImage::from_fn(
        (width + 2 * QUIET_ZONE) * SCALE,
        (rows + 2 * QUIET_ZONE) * SCALE,
        |x, y| {
            let (column, row) = (x / SCALE, y / SCALE);
            let dark = column >= QUIET_ZONE
                && row >= QUIET_ZONE
                && symbol.module_is_set((row - QUIET_ZONE) as usize, (column - QUIET_ZONE) as usize);
            Luma([if dark { 0 } else { 255 }])
        },
    )
}

/// Write `img` to a temporary PNG and read it back. The file is removed
/// afterwards unless `keep` is set.
fn through_png(img: &GrayImage, keep: bool) -> Result<GrayImage> {
    let file = tempfile::Builder::new()
        .prefix("zedcheck-")
        .suffix(".png")
        .tempfile()?;
    img.save(file.path()).map_err(|e| Error::Image(e.to_string()))?;
    let loaded = image::open(file.path())
        .map_err(|e| Error::Image(e.to_string()))?
        .to_luma8();
    if keep {
        let (_file, path) = file.keep().map_err(|e| Error::Io(e.error))?;
        info!("kept {}", path.display());
    }
    Ok(loaded)
}

/// A segment header read back from a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Eci(u32),
    Data { mode: Mode, count: usize },
}

/// Decoded bytes of a symbol and the segment headers they were read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    pub bytes: Vec<u8>,
    pub segments: Vec<Segment>,
}

fn protocol(e: DeQRError) -> Error {
    Error::Protocol {
        tool: TOOL,
        reason: format!("{e:?}"),
    }
}

fn qr_protocol(e: QrError) -> Error {
    Error::Protocol {
        tool: TOOL,
        reason: format!("{e:?}"),
    }
}

/// Scan `symbol` and return what it decodes to.
pub fn rqrr_roundtrip(config: &HarnessConfig, symbol: &Symbol) -> Result<Scan> {
    let img = through_png(&render(symbol), config.keep_outfile())?;

    let (width, height) = (img.width() as usize, img.height() as usize);
    let raw = img.as_raw();
    let mut prepared = ::rqrr::PreparedImage::prepare_from_greyscale(width, height, |x, y| raw[y * width + x]);
    let grids = prepared.detect_grids();
    let [grid] = grids.as_slice() else {
        return Err(Error::Protocol {
            tool: TOOL,
            reason: format!("found {} grids", grids.len()),
        });
    };
    scan_grid(grid)
}

/// Decode `grid` and read its segment headers.
pub fn scan_grid<G: BitGrid>(grid: &Grid<G>) -> Result<Scan> {
    let mut bytes = Vec::new();
    let meta = grid.decode_to(&mut bytes).map_err(protocol)?;

    let version = Version::Normal(meta.version.0 as i16);
    let unmasked = Grid::new(Unmasked {
        grid: &grid.grid,
        version,
        mask: meta.mask,
    });
    let (_, raw) = unmasked.get_raw_data().map_err(protocol)?;
    let data = data_codewords(&raw, version, ec_level(&meta))?;
    let segments = parse_segments(&data, version)?;
    debug!("{version:?} mask {}: {segments:?}", meta.mask);
    Ok(Scan { bytes, segments })
}

/// Data modules of a grid with the mask removed. Function patterns and
/// format information read as they are.
struct Unmasked<'a, G> {
    grid: &'a G,
    version: Version,
    mask: u16,
}

impl<G: BitGrid> BitGrid for Unmasked<'_, G> {
    fn size(&self) -> usize {
        self.grid.size()
    }

    fn bit(&self, y: usize, x: usize) -> bool {
        let bit = self.grid.bit(y, x);
        if is_functional(self.version, self.size() as i16, x as i16, y as i16) {
            return bit;
        }
        bit ^ mask_bit(self.mask, y, x)
    }
}

fn mask_bit(mask: u16, y: usize, x: usize) -> bool {
    match mask {
        0 => (y + x) % 2 == 0,
        1 => y % 2 == 0,
        2 => x % 3 == 0,
        3 => (y + x) % 3 == 0,
        4 => (y / 2 + x / 3) % 2 == 0,
        5 => (y * x) % 2 + (y * x) % 3 == 0,
        6 => ((y * x) % 2 + (y * x) % 3) % 2 == 0,
        _ => ((y * x) % 3 + (y + x) % 2) % 2 == 0,
    }
}

/// Level from the two format information bits.
fn ec_level(meta: &MetaData) -> EcLevel {
    match meta.ecc_level {
        0 => EcLevel::M,
        1 => EcLevel::L,
        2 => EcLevel::H,
        _ => EcLevel::Q,
    }
}

/// Data codewords of `raw` in block order, undoing the interleave.
fn data_codewords(raw: &RawData, version: Version, level: EcLevel) -> Result<Vec<u8>> {
    let len = Bits::new(version).max_len(level).map_err(qr_protocol)? / 8;
    if raw.len < len * 8 {
        return Err(Error::Protocol {
            tool: TOOL,
            reason: format!("{} bits read, {len} data codewords expected", raw.len),
        });
    }
    // Interleave the codeword indices to find where each one was placed
    let low: Vec<u8> = (0..len).map(|i| i as u8).collect();
    let high: Vec<u8> = (0..len).map(|i| (i >> 8) as u8).collect();
    let (low, _) = construct_codewords(&low, version, level).map_err(qr_protocol)?;
    let (high, _) = construct_codewords(&high, version, level).map_err(qr_protocol)?;

    let mut data = vec![0; len];
    for (placed, (lo, hi)) in low.iter().zip(&high).enumerate() {
        data[usize::from(*hi) << 8 | usize::from(*lo)] = raw.data[placed];
    }
    Ok(data)
}

struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl BitReader<'_> {
    fn remaining(&self) -> usize {
        self.data.len() * 8 - self.pos
    }

    fn need(&self, nbits: usize) -> Result<()> {
        if nbits > self.remaining() {
            return Err(Error::Protocol {
                tool: TOOL,
                reason: format!("segment needs {nbits} bits, {} left", self.remaining()),
            });
        }
        Ok(())
    }

    fn take(&mut self, nbits: usize) -> Result<usize> {
        self.need(nbits)?;
        let mut value = 0;
        for _ in 0..nbits {
            let bit = (self.data[self.pos / 8] >> (7 - self.pos % 8)) & 1;
            value = value << 1 | usize::from(bit);
            self.pos += 1;
        }
        Ok(value)
    }

    fn skip(&mut self, nbits: usize) -> Result<()> {
        self.need(nbits)?;
        self.pos += nbits;
        Ok(())
    }
}

/// Segment headers of a data bit stream, up to the terminator.
fn parse_segments(data: &[u8], version: Version) -> Result<Vec<Segment>> {
    let mut reader = BitReader { data, pos: 0 };
    let mut segments = Vec::new();
    while reader.remaining() >= 4 {
        let mode = match reader.take(4)? {
            0b0000 => break,
            0b0111 => {
                let first = reader.take(8)?;
                let eci = match first {
                    f if f & 0x80 == 0 => f,
                    f if f & 0xC0 == 0x80 => (f & 0x3F) << 8 | reader.take(8)?,
                    f => (f & 0x1F) << 16 | reader.take(16)?,
                };
                segments.push(Segment::Eci(eci as u32));
                continue;
            }
            0b0001 => Mode::Numeric,
            0b0010 => Mode::Alphanumeric,
            0b0100 => Mode::Byte,
            0b1000 => Mode::Kanji,
            other => {
                return Err(Error::Protocol {
                    tool: TOOL,
                    reason: format!("unexpected mode indicator {other:04b}"),
                })
            }
        };
        let count = reader.take(mode.length_bits_count(version))?;
        let nbits = match mode {
            Mode::Numeric => count / 3 * 10 + [0, 4, 7][count % 3],
            Mode::Alphanumeric => count / 2 * 11 + count % 2 * 6,
            Mode::Byte => count * 8,
            Mode::Kanji => count * 13,
        };
        // Payload is checked by the byte comparison
        reader.skip(nbits)?;
        segments.push(Segment::Data { mode, count });
    }
    Ok(segments)
}

/// Bytes the symbol should carry for `data` encoded under `req`, or `None`
/// if the data cannot be represented.
pub fn rqrr_expected(req: &EncodeRequest, data: &[u8]) -> Option<Vec<u8>> {
    if !req.input_mode.contains(InputMode::UNICODE) {
        return Some(data.to_vec());
    }
    let text = std::str::from_utf8(data).ok()?;
    if req.eci == ECI_KSX1001 {
        return utf8_to_euc_kr(text).ok();
    }
    if !req.has_eci() && text.chars().all(|c| (c as u32) < 0x100) {
        return Some(text.chars().map(|c| c as u8).collect());
    }
    Some(data.to_vec())
}

pub fn rqrr_cmp(decoded: &[u8], expected: &[u8]) -> std::result::Result<(), Mismatch> {
    if decoded == expected {
        return Ok(());
    }
    Err(Mismatch::bytes(TOOL, "decoded bytes differ", decoded, expected))
}

/// ECI the symbol should announce for `data` encoded under `req`.
pub fn rqrr_expected_eci(req: &EncodeRequest, data: &[u8]) -> Option<u32> {
    if req.has_eci() {
        return u32::try_from(req.eci).ok();
    }
    if !req.input_mode.contains(InputMode::UNICODE) {
        return None;
    }
    let text = std::str::from_utf8(data).ok()?;
    text.chars().any(|c| (c as u32) >= 0x100).then_some(ECI_UTF8 as u32)
}

/// Segment headers must announce exactly `eci` and never use Kanji mode.
pub fn rqrr_segments_cmp(segments: &[Segment], eci: Option<u32>) -> std::result::Result<(), Mismatch> {
    let ecis: Vec<u32> = segments
        .iter()
        .filter_map(|s| match s {
            Segment::Eci(designator) => Some(*designator),
            Segment::Data { .. } => None,
        })
        .collect();
    let expected: Vec<u32> = eci.into_iter().collect();
    if ecis != expected {
        return Err(Mismatch::new(
            TOOL,
            "ECI designators differ",
            format!("{ecis:?}"),
            format!("{expected:?}"),
        ));
    }
    if segments.iter().any(|s| matches!(s, Segment::Data { mode: Mode::Kanji, .. })) {
        return Err(Mismatch::new(
            TOOL,
            "Kanji mode segment",
            format!("{segments:?}"),
            "no Kanji mode",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{Encoder, QrEncoder, UNSET};

    #[test]
    fn test_render_geometry() {
        let symbol = QrEncoder
            .encode(&EncodeRequest::new(Symbology::QrCode, InputMode::DATA, &b"1"[..]))
            .symbol
            .unwrap();
        let img = render(&symbol);
        assert_eq!(img.dimensions(), (29 * SCALE, 29 * SCALE));
        // Quiet zone is light, top-left finder corner is dark
        assert_eq!(img.get_pixel(0, 0), &Luma([255]));
        let corner = QUIET_ZONE * SCALE;
        assert_eq!(img.get_pixel(corner, corner), &Luma([0]));
    }

    fn qr_symbol(req: &EncodeRequest) -> Symbol {
        QrEncoder.encode(req).symbol.unwrap()
    }

    fn scan_matrix(symbol: &Symbol) -> Scan {
        let grid = Grid::new(::rqrr::SimpleGrid::from_func(symbol.width(), |x, y| {
            symbol.module_is_set(y, x)
        }));
        scan_grid(&grid).unwrap()
    }

    #[test]
    fn test_roundtrip() {
        let config = HarnessConfig::new();
        for data in [&b"01234567"[..], b"HELLO WORLD", b"\x00\xFF binary"] {
            let req = EncodeRequest::new(Symbology::QrCode, InputMode::DATA, data);
            let scan = rqrr_roundtrip(&config, &qr_symbol(&req)).unwrap();
            assert_eq!(rqrr_cmp(&scan.bytes, data), Ok(()));
            assert_eq!(rqrr_segments_cmp(&scan.segments, None), Ok(()));
        }
    }

    #[test]
    fn test_roundtrip_eci_ksx1001() {
        let config = HarnessConfig::new();
        let req = EncodeRequest::new(Symbology::QrCode, InputMode::UNICODE, "한국어".as_bytes()).eci(ECI_KSX1001);
        let scan = rqrr_roundtrip(&config, &qr_symbol(&req)).unwrap();
        let expected = rqrr_expected(&req, &req.data).unwrap();
        assert_eq!(expected, [0xC7, 0xD1, 0xB1, 0xB9, 0xBE, 0xEE]);
        assert_eq!(rqrr_cmp(&scan.bytes, &expected), Ok(()));
        assert_eq!(
            scan.segments,
            [Segment::Eci(30), Segment::Data { mode: Mode::Byte, count: 6 }]
        );
        assert_eq!(rqrr_segments_cmp(&scan.segments, rqrr_expected_eci(&req, &req.data)), Ok(()));
    }

    #[test]
    fn test_scan_segments_across_versions() {
        // Single block, several blocks, version information, wider counts
        for (option_1, option_2) in [(1, 1), (3, 5), (2, 7), (4, 10), (3, 27)] {
            let req = EncodeRequest::new(Symbology::QrCode, InputMode::DATA, &b"HELLO WORLD"[..])
                .options(option_1, option_2, UNSET);
            let scan = scan_matrix(&qr_symbol(&req));
            assert_eq!(scan.bytes, b"HELLO WORLD", "{option_2}");
            assert_eq!(
                scan.segments,
                [Segment::Data { mode: Mode::Alphanumeric, count: 11 }],
                "{option_1} {option_2}"
            );
        }

        let req = EncodeRequest::new(Symbology::QrCode, InputMode::DATA, &b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ"[..]);
        let scan = scan_matrix(&qr_symbol(&req));
        assert_eq!(scan.bytes, req.data);
        let count: usize = scan
            .segments
            .iter()
            .map(|s| match s {
                Segment::Data { count, .. } => *count,
                Segment::Eci(_) => 0,
            })
            .sum();
        assert_eq!(count, 36);
    }

    #[test]
    fn test_kanji_segment_detected() {
        // Same bytes as Latin-1 "àá", packed as one Shift JIS character
        let mut bits = Bits::new(Version::Normal(1));
        bits.push_kanji_data(&[0xE0, 0xE1]).unwrap();
        bits.push_terminator(EcLevel::L).unwrap();
        let code = qrcode::QrCode::with_bits(bits, EcLevel::L).unwrap();
        let modules = code.to_colors().into_iter().map(|c| c == qrcode::Color::Dark).collect();
        let matrix = crate::modules::ModuleMatrix::from_modules(21, 21, modules).unwrap();
        let symbol = Symbol::new(Symbology::QrCode, matrix);

        let scan = rqrr_roundtrip(&HarnessConfig::new(), &symbol).unwrap();
        let req = EncodeRequest::new(Symbology::QrCode, InputMode::UNICODE, "àá".as_bytes());
        // The bytes alone cannot tell the modes apart
        assert_eq!(rqrr_cmp(&scan.bytes, &rqrr_expected(&req, &req.data).unwrap()), Ok(()));
        assert_eq!(scan.segments, [Segment::Data { mode: Mode::Kanji, count: 1 }]);
        let err = rqrr_segments_cmp(&scan.segments, rqrr_expected_eci(&req, &req.data)).unwrap_err();
        assert_eq!(err.reason, "Kanji mode segment");

        // The encoder keeps these bytes in byte mode
        let scan = rqrr_roundtrip(&HarnessConfig::new(), &qr_symbol(&req)).unwrap();
        assert_eq!(scan.segments, [Segment::Data { mode: Mode::Byte, count: 2 }]);
    }

    #[test]
    fn test_expected_eci() {
        let req = EncodeRequest::new(Symbology::QrCode, InputMode::UNICODE, "é".as_bytes());
        assert_eq!(rqrr_expected_eci(&req, &req.data), None);
        let req = EncodeRequest::new(Symbology::QrCode, InputMode::UNICODE, "가".as_bytes());
        assert_eq!(rqrr_expected_eci(&req, &req.data), Some(26));
        let req = req.eci(ECI_KSX1001);
        assert_eq!(rqrr_expected_eci(&req, &req.data), Some(30));

        let err = rqrr_segments_cmp(&[Segment::Data { mode: Mode::Byte, count: 3 }], Some(26)).unwrap_err();
        assert_eq!(err.reason, "ECI designators differ");
        assert_eq!((err.actual.as_str(), err.expected.as_str()), ("[]", "[26]"));
    }

    #[test]
    fn test_can_rqrr() {
        let req = EncodeRequest::new(Symbology::MicroQr, InputMode::DATA, &b"1"[..]);
        assert!(!can_rqrr(0, &req));
    }
}
