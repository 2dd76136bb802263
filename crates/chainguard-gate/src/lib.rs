/*! chainguard-gate
 *
 * Ponto de confirmação das transferências: coleta os parâmetros, consulta o
 * serviço de inferência, exibe o risco e só transmite após confirmação
 * explícita do usuário.
 */

pub mod config;
pub mod gate;
pub mod session;
pub mod wallet;

pub use config::*;
pub use gate::*;
pub use session::*;
pub use wallet::*;
