/*!
 * ChainGuard Utils
 *
 * Utilitários comuns usados em toda a workspace ChainGuard
 */

use chrono::{DateTime, NaiveDateTime, Utc};
use ethereum_types::{Address, H256, U256};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Converte uma string hexadecimal para Address
pub fn hex_to_address(hex: &str) -> Option<Address> {
    let hex_str = hex.trim();
    let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    if hex_str.len() != 40 {
        return None;
    }
    Address::from_str(hex_str).ok()
}

/// Converte uma string decimal para U256
pub fn decimal_to_u256(decimal: &str) -> Option<U256> {
    U256::from_dec_str(decimal).ok()
}

/// Formata um Address para exibição
pub fn format_address(address: &Address) -> String {
    format!("0x{:x}", address)
}

/// Formata um H256 para exibição
pub fn format_h256(hash: &H256) -> String {
    format!("0x{:x}", hash)
}

/// Forma abreviada de um endereço (`0x1234...`)
pub fn short_address(address: &Address) -> String {
    let full = format_address(address);
    format!("{}...", &full[..6])
}

/// Converte um valor em ether (ex.: "0.5") para wei
pub fn parse_ether_amount(amount: &str) -> Result<U256> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(Error::ValidationError("valor vazio".to_string()));
    }
    if amount.starts_with('-') {
        return Err(Error::ValidationError(format!("valor negativo: {}", amount)));
    }
    ethers::utils::parse_ether(amount)
        .map_err(|e| Error::ValidationError(format!("valor inválido '{}': {}", amount, e)))
}

/// Interpreta um timestamp RFC 3339 ou ISO sem fuso (assumido UTC)
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}
