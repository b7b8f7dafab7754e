//! Collection of the rewrite steps recorded by the simplifier.

/// A sink for the steps taken by an algorithm, such as the rewrites performed by the simplifier.
///
/// The unit type `()` discards every step, and `Vec<S>` keeps all of them in order. Wrap another
/// collector in a [`CountingCollector`] to also learn how many steps were taken.
pub trait StepCollector<S> {
    /// Records a step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

impl<S, C: StepCollector<S> + ?Sized> StepCollector<S> for &mut C {
    #[inline]
    fn push(&mut self, step: S) {
        (**self).push(step);
    }
}

/// Forwards every step to an inner collector while counting them.
///
/// [`simplify_fully_with_steps`](super::simplify::simplify_fully_with_steps) uses this to detect a
/// pass that rewrote nothing, without buffering the steps of each pass.
#[derive(Debug, Default)]
pub struct CountingCollector<C> {
    inner: C,
    count: usize,
}

impl<C> CountingCollector<C> {
    /// Wraps the given collector, starting the count at zero.
    pub fn new(inner: C) -> Self {
        Self { inner, count: 0 }
    }

    /// Returns the number of steps pushed so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the wrapped collector.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<S, C: StepCollector<S>> StepCollector<S> for CountingCollector<C> {
    fn push(&mut self, step: S) {
        self.count += 1;
        self.inner.push(step);
    }
}
