/*!
 * ChainGuard Core
 *
 * Tipos, erros e traits compartilhados para a workspace ChainGuard
 */

pub mod types;
pub mod traits;
pub mod utils;
pub mod error;

// Re-exportações públicas
pub use error::Error;
pub use types::*;
