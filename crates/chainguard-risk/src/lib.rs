/*!
 * ChainGuard Risk
 *
 * Converte a confiança do modelo em pontuação de risco 0-100, mapeia a
 * pontuação para uma ação recomendada e ranqueia listas de transações.
 */

mod mapper;
mod classifier;
mod assessment;
mod ranking;
mod sample;

pub use mapper::*;
pub use classifier::*;
pub use assessment::*;
pub use ranking::*;
pub use sample::*;
