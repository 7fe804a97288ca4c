/// Geometric restart schedule with LBD-based clause deletion thresholds
#[derive(Clone, Debug)]
pub struct Restarts {
    conflicts: usize,
    conflicts_limit: usize,
    lbd_limit: f64,
    growth: f64,
}

impl Restarts {
    /// `growth` must be greater than 1
    pub fn new(conflicts_limit: usize, lbd_limit: f64, growth: f64) -> Self {
        Self {
            conflicts: 0,
            conflicts_limit: conflicts_limit.max(1),
            lbd_limit,
            growth,
        }
    }

    /// Counts a conflict; true when it is time to restart
    pub fn on_conflict(&mut self) -> bool {
        self.conflicts += 1;
        self.conflicts >= self.conflicts_limit
    }

    /// Learned clauses with a higher LBD are deleted on restart
    pub fn lbd_limit(&self) -> f64 {
        self.lbd_limit
    }

    pub fn conflicts_limit(&self) -> usize {
        self.conflicts_limit
    }

    /// Resets the conflict counter and makes the next restart less eager
    pub fn grow(&mut self) {
        self.conflicts = 0;
        let grown = (self.conflicts_limit as f64 * self.growth) as usize;
        self.conflicts_limit = grown.max(self.conflicts_limit + 1);
        self.lbd_limit *= self.growth;
    }
}

#[test]
fn limits_grow_after_each_restart() {
    let mut restarts = Restarts::new(2, 3.0, 1.1);
    assert!(!restarts.on_conflict());
    assert!(restarts.on_conflict());

    restarts.grow();
    assert_eq!(restarts.conflicts_limit(), 3);
    assert!((restarts.lbd_limit() - 3.3).abs() < 1e-9);
    assert!(!restarts.on_conflict());
    assert!(!restarts.on_conflict());
    assert!(restarts.on_conflict());

    let mut restarts = Restarts::new(100, 3.0, 1.1);
    restarts.grow();
    assert_eq!(restarts.conflicts_limit(), 110);
}
