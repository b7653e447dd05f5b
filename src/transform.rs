use glam::{Mat4, Vec3};
use std::fmt;
use std::ops::{Deref, DerefMut};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackUnderflowError;

impl fmt::Display for StackUnderflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stack_underflow")
    }
}

impl std::error::Error for StackUnderflowError {}

/// Save/restore stack of cumulative local-to-world matrices.
///
/// The base element is the identity and can never be popped, so
/// `current()` always holds a valid model matrix. Transform calls
/// right-multiply the top, which composes in the local frame:
/// `translate` then `scale` scales first, then moves the scaled object.
#[derive(Clone, Debug)]
pub struct TransformStack {
    stack: Vec<Mat4>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self {
            stack: vec![Mat4::IDENTITY],
        }
    }

    /// Duplicate the current top (scoped save). Prefer `scope()` when the
    /// matching `pop` should be tied to a lexical region.
    pub fn push(&mut self) {
        let top = self.current();
        self.stack.push(top);
    }

    /// Discard the top and restore the previous cumulative matrix.
    ///
    /// Popping the base identity is a programming error, never a
    /// recoverable runtime condition.
    pub fn pop(&mut self) -> Result<(), StackUnderflowError> {
        if self.stack.len() == 1 {
            return Err(StackUnderflowError);
        }
        self.stack.pop();
        Ok(())
    }

    /// Push and return a guard that restores the stack to its current
    /// depth on drop, so a subtree's transforms cannot leak into
    /// siblings even on early exit.
    pub fn scope(&mut self) -> StackScope<'_> {
        let restore_depth = self.stack.len();
        self.push();
        StackScope {
            stack: self,
            restore_depth,
        }
    }

    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.apply(Mat4::from_translation(Vec3::new(dx, dy, dz)));
    }

    pub fn scale(&mut self, sx: f32, sy: f32, sz: f32) {
        self.apply(Mat4::from_scale(Vec3::new(sx, sy, sz)));
    }

    /// The cumulative model matrix currently in effect.
    pub fn current(&self) -> Mat4 {
        self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn apply(&mut self, m: Mat4) {
        let i = self.stack.len() - 1;
        self.stack[i] = self.stack[i] * m;
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII guard from [`TransformStack::scope`]; holds the stack exclusively
/// and restores the saved matrix when dropped.
pub struct StackScope<'a> {
    stack: &'a mut TransformStack,
    restore_depth: usize,
}

impl Deref for StackScope<'_> {
    type Target = TransformStack;

    fn deref(&self) -> &TransformStack {
        self.stack
    }
}

impl DerefMut for StackScope<'_> {
    fn deref_mut(&mut self) -> &mut TransformStack {
        self.stack
    }
}

impl Drop for StackScope<'_> {
    fn drop(&mut self) {
        // Truncate rather than pop: push/pop calls made through the
        // guard may have left the depth anywhere at or above the entry
        // depth, and the base must survive regardless.
        self.stack.stack.truncate(self.restore_depth);
    }
}
