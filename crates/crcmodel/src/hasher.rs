//! Streaming hasher over any [`CrcEngine`].

use traits::Checksum;

use crate::CrcEngine;

/// Streaming CRC hasher.
///
/// Holds an engine and its pre-final register. [`Checksum::finalize`] does not
/// consume or modify the register, so more data can follow.
///
/// # Example
///
/// ```
/// use crcmodel::{Crc, CrcModel, CrcParams, Engine};
/// use traits::Checksum;
///
/// let model = CrcModel::new(CrcParams::CRC32)?;
/// let mut hasher = Crc::new(Engine::auto(model));
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), 0xCBF4_3926);
/// # Ok::<(), crcmodel::ModelError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Crc<E> {
  engine: E,
  state: u64,
}

impl<E: CrcEngine> Crc<E> {
  /// Create a hasher in the engine's initial state.
  #[must_use]
  pub fn new(engine: E) -> Self {
    let state = engine.init();
    Self { engine, state }
  }

  /// Create a hasher to resume from a pre-final register captured with
  /// [`pre_final`](Self::pre_final) on the same engine.
  #[must_use]
  pub fn resume(engine: E, pre_final: u64) -> Self {
    let state = pre_final & engine.model().crc_mask();
    Self { engine, state }
  }

  /// The engine doing the work.
  #[must_use]
  pub fn engine(&self) -> &E {
    &self.engine
  }

  /// The raw register before output reflection and XOR.
  #[must_use]
  pub fn pre_final(&self) -> u64 {
    self.state
  }
}

impl<E: CrcEngine + Clone> Checksum for Crc<E> {
  type Output = u64;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.state = self.engine.update(self.state, data);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    self.engine.finalize(self.state)
  }

  #[inline]
  fn reset(&mut self) {
    self.state = self.engine.init();
  }
}
