//! Single-slot memory register

/// Single mutable scalar slot, default 0
#[derive(Debug, Default)]
pub struct MemoryRegister {
    value: f64,
}

impl MemoryRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, replacing the previous one, and return it
    pub fn save(&mut self, value: f64) -> f64 {
        self.value = value;
        self.value
    }

    /// Current value, no side effects
    pub fn read(&self) -> f64 {
        self.value
    }

    /// Reset to 0 and return the new value
    pub fn clear(&mut self) -> f64 {
        self.value = 0.0;
        self.value
    }
}
