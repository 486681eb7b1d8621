use std::fmt::Debug;

/// Append-only arena addressed by `i32` indices.
///
/// Nodes of a region quadtree are never merged or removed, so unlike a
/// free-list arena there is no vacancy tracking here: an index handed out by
/// [`List::push`] stays valid for the lifetime of the list.
#[derive(Clone, Debug)]
pub struct List<T>
    where T: Debug
{
    data: Vec<T>,
}

impl<T> List<T>
    where
        T: Debug,
{
    pub fn new() -> Self {
        Self::with_capacity(128)
    }

    pub fn with_capacity(capacity: i32) -> Self {
        Self {
            data: Vec::with_capacity(capacity.max(0) as usize),
        }
    }

    pub fn size(&self) -> i32 {
        self.data.len() as i32
    }

    pub fn get(&self, index: i32) -> &T {
        debug_assert!(index >= 0 && index < self.size());
        &self.data[index as usize]
    }

    pub fn get_mut(&mut self, index: i32) -> &mut T {
        debug_assert!(index >= 0 && index < self.size());
        &mut self.data[index as usize]
    }

    pub fn push(&mut self, element: T) -> i32 {
        let index = self.size();
        self.data.push(element);
        index
    }

    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }
}
