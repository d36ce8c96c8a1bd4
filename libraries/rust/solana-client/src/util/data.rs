/// Joining of two items of the same type into one, where ordering is
/// significant: `self` always comes first.
pub trait Concat: Sized {
    fn cat(self, other: Self) -> Self;

    fn cat_ref(self, other: &Self) -> Self;

    /// Concatenate a sequence of items onto this one, in order.
    fn cat_all<T: Into<Self>>(self, others: impl IntoIterator<Item = T>) -> Self {
        others
            .into_iter()
            .fold(self, |acc, next| acc.cat(next.into()))
    }
}

impl<T: Clone> Concat for Vec<T> {
    fn cat(mut self, other: Self) -> Self {
        self.extend(other.into_iter());
        self
    }

    fn cat_ref(mut self, other: &Self) -> Self {
        self.extend(other.iter().cloned());
        self
    }
}
