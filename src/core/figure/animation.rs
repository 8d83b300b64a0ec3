//! Exponentielle Annäherung animierter Darstellungswerte.

/// Ease-Faktor pro Frame (`current += (target - current) * EASE`).
pub const EASE: f32 = 0.12;

/// Animierter Wert, der pro Tick auf sein Ziel zuläuft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eased {
    /// Aktueller (gezeichneter) Wert
    pub current: f32,
    /// Zielwert
    pub target: f32,
}

impl Eased {
    /// Erstellt einen ruhenden Wert (current == target).
    pub const fn new(value: f32) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    /// Setzt nur das Ziel; `current` folgt über [`Self::step`].
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Ein Frame: `current += (target - current) * ease`.
    pub fn step(&mut self, ease: f32) {
        self.current += (self.target - self.current) * ease;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_step_follows_exact_update_rule() {
        let mut v = Eased::new(1.0);
        v.set_target(1.5);
        v.step(EASE);
        assert_relative_eq!(v.current, 1.0 + 0.5 * 0.12);
        v.step(EASE);
        assert_relative_eq!(v.current, 1.06 + (1.5 - 1.06) * 0.12);
    }

    #[test]
    fn test_resting_value_does_not_drift() {
        let mut v = Eased::new(0.4);
        for _ in 0..100 {
            v.step(EASE);
        }
        assert_relative_eq!(v.current, 0.4);
    }
}
