use ethereum_types::U256;

/// Limite de gas de uma transferência simples
pub const DEFAULT_GAS_LIMIT: u64 = 21_000;
/// 20 gwei
pub const DEFAULT_GAS_PRICE_WEI: u64 = 20_000_000_000;

/// Configuração do gate de transações
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    /// Usado quando a estimativa de gas falha
    pub default_gas_limit: U256,
    /// Usado quando os dados de taxa não estão disponíveis
    pub default_gas_price: U256,
    /// Calldata enviada ao modelo; transferências nativas não têm dados
    pub input_data: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            default_gas_limit: U256::from(DEFAULT_GAS_LIMIT),
            default_gas_price: U256::from(DEFAULT_GAS_PRICE_WEI),
            input_data: "0x".to_string(),
        }
    }
}
