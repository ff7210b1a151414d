//! Minimal bech32 (BIP-173) codec.
//!
//! Only what display-address encoding needs: checksummed encode/decode over
//! 5-bit groups plus the 8-to-5-bit regrouping helper. No bech32m.

use thiserror::Error;

const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const GENERATOR: [u32; 5] = [
    0x3b6a_57b2,
    0x2650_8e6d,
    0x1ea1_19fa,
    0x3d42_33dd,
    0x2a14_62b3,
];

/// Bech32 encoding/decoding error
#[derive(Debug, Error)]
pub enum Bech32Error {
    /// Human-readable part violates the BIP-173 constraints
    #[error("invalid human-readable part: {0}")]
    InvalidHrp(String),
    /// A data value does not fit in 5 bits, or regrouping left stray bits
    #[error("invalid data: {0}")]
    InvalidData(String),
    /// A character outside the bech32 charset in the data part
    #[error("invalid character {0:?} in data part")]
    InvalidChar(char),
    /// No `1` separator between hrp and data
    #[error("missing hrp separator")]
    MissingSeparator,
    /// Checksum did not verify
    #[error("checksum verification failed")]
    InvalidChecksum,
}

fn polymod<I: IntoIterator<Item = u8>>(values: I) -> u32 {
    let mut chk: u32 = 1;
    for value in values {
        let top = chk >> 25;
        chk = (chk & 0x1ff_ffff) << 5 ^ u32::from(value);
        for (i, gen) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= gen;
            }
        }
    }
    chk
}

fn hrp_expand(hrp: &str) -> impl Iterator<Item = u8> + '_ {
    hrp.bytes()
        .map(|b| b >> 5)
        .chain(std::iter::once(0))
        .chain(hrp.bytes().map(|b| b & 31))
}

/// Check the BIP-173 hrp constraints: 1..=83 bytes, ASCII 33..=126,
/// lowercase only.
pub fn validate_hrp(hrp: &str) -> Result<(), Bech32Error> {
    if hrp.is_empty() || hrp.len() > 83 {
        return Err(Bech32Error::InvalidHrp(format!(
            "length {} out of range 1..=83",
            hrp.len()
        )));
    }
    for byte in hrp.bytes() {
        if !(33..=126).contains(&byte) {
            return Err(Bech32Error::InvalidHrp(format!(
                "byte {byte:#04x} outside printable range"
            )));
        }
        if byte.is_ascii_uppercase() {
            return Err(Bech32Error::InvalidHrp(format!(
                "uppercase character in {hrp:?}"
            )));
        }
    }
    Ok(())
}

fn checksum(hrp: &str, data: &[u8]) -> [u8; 6] {
    let values = hrp_expand(hrp)
        .chain(data.iter().copied())
        .chain([0u8; 6]);
    let pm = polymod(values) ^ 1;
    let mut out = [0u8; 6];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = ((pm >> (5 * (5 - i))) & 31) as u8;
    }
    out
}

/// Encode 5-bit data values under the given hrp.
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, Bech32Error> {
    validate_hrp(hrp)?;
    if let Some(&bad) = data.iter().find(|&&v| v > 31) {
        return Err(Bech32Error::InvalidData(format!(
            "value {bad} does not fit in 5 bits"
        )));
    }
    let mut out = String::with_capacity(hrp.len() + 1 + data.len() + 6);
    out.push_str(hrp);
    out.push('1');
    for &value in data.iter().chain(checksum(hrp, data).iter()) {
        out.push(CHARSET[value as usize] as char);
    }
    Ok(out)
}

/// Decode a bech32 string into its hrp and 5-bit data values, verifying the
/// checksum. Uppercase input is rejected.
pub fn decode(encoded: &str) -> Result<(String, Vec<u8>), Bech32Error> {
    if encoded.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(Bech32Error::InvalidHrp(
            "uppercase input not accepted".to_string(),
        ));
    }
    let sep = encoded.rfind('1').ok_or(Bech32Error::MissingSeparator)?;
    let (hrp, rest) = (&encoded[..sep], &encoded[sep + 1..]);
    validate_hrp(hrp)?;
    if rest.len() < 6 {
        return Err(Bech32Error::InvalidData(
            "data part shorter than the checksum".to_string(),
        ));
    }
    let mut values = Vec::with_capacity(rest.len());
    for ch in rest.chars() {
        let pos = CHARSET
            .iter()
            .position(|&c| c as char == ch)
            .ok_or(Bech32Error::InvalidChar(ch))?;
        values.push(pos as u8);
    }
    if polymod(hrp_expand(hrp).chain(values.iter().copied())) != 1 {
        return Err(Bech32Error::InvalidChecksum);
    }
    values.truncate(values.len() - 6);
    Ok((hrp.to_string(), values))
}

/// Regroup a bit stream between arbitrary group sizes (8-to-5 when encoding
/// addresses, 5-to-8 when decoding them).
pub fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Result<Vec<u8>, Bech32Error> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut out = Vec::new();
    let maxv: u32 = (1 << to) - 1;
    for &value in data {
        if u32::from(value) >> from != 0 {
            return Err(Bech32Error::InvalidData(format!(
                "value {value} does not fit in {from} bits"
            )));
        }
        acc = (acc << from) | u32::from(value);
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & maxv) as u8);
        }
    }
    if pad {
        if bits > 0 {
            out.push(((acc << (to - bits)) & maxv) as u8);
        }
    } else if bits >= from || ((acc << (to - bits)) & maxv) != 0 {
        return Err(Bech32Error::InvalidData(
            "stray bits after regrouping".to_string(),
        ));
    }
    Ok(out)
}
