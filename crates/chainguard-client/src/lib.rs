/*!
 * ChainGuard Client
 *
 * Cliente HTTP para o serviço externo de inferência de fraude, o perfil de
 * reputação de carteiras e a listagem das transações mais arriscadas
 */

mod config;
mod inference;

pub use config::*;
pub use inference::*;
