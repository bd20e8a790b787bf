use crate::treap::map::TreapMap;

/// An ordered set implemented by a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a key and a priority. The key of any node is greater than all keys in its left subtree
/// and less than all keys occuring in its right subtree. The priority of a node is greater than
/// the priority of all nodes in its subtrees. By randomly generating priorities, the expected
/// height of the tree is proportional to the logarithm of the number of keys.
///
/// # Examples
///
/// ```
/// use treap_collections::treap::TreapSet;
///
/// let mut set = TreapSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.size(), 2);
/// assert!(set.contains(&0));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct TreapSet<T> {
    map: TreapMap<T, ()>,
}

impl<T> TreapSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `TreapSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let set: TreapSet<u32> = TreapSet::new();
    /// ```
    pub fn new() -> Self {
        TreapSet {
            map: TreapMap::new(),
        }
    }

    /// Inserts a key into the set. If the key already exists in the set, it will return and
    /// replace the key, leaving the size unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// assert_eq!(set.insert(1), None);
    /// assert!(set.contains(&1));
    /// assert_eq!(set.insert(1), Some(1));
    /// assert_eq!(set.size(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> Option<T> {
        self.map.insert(key, ()).map(|pair| pair.0)
    }

    /// Removes a key from the set. If the key exists in the set, it will return the key.
    /// Otherwise it will return `None` and leave the set untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        self.map.remove(key).map(|pair| pair.0)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        self.map.contains(key)
    }

    /// Returns the number of keys in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert_eq!(set.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        self.map.size()
    }

    /// Returns `true` if the set contains no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let set: TreapSet<u32> = TreapSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Removes every key from the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<T> Default for TreapSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::TreapSet;

    #[test]
    fn test_size_empty() {
        let set: TreapSet<u32> = TreapSet::new();
        assert_eq!(set.size(), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert() {
        let mut set = TreapSet::new();
        set.insert(1);
        assert!(set.contains(&1));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = TreapSet::new();
        let ret_1 = set.insert(1);
        let ret_2 = set.insert(1);
        assert_eq!(ret_1, None);
        assert_eq!(ret_2, Some(1));
        assert_eq!(set.size(), 1);
    }

    #[test]
    fn test_remove() {
        let mut set = TreapSet::new();
        set.insert(1);
        let ret = set.remove(&1);
        assert!(!set.contains(&1));
        assert_eq!(ret, Some(1));
        assert_eq!(set.size(), 0);
    }

    #[test]
    fn test_remove_absent() {
        let mut set = TreapSet::new();
        set.insert(1);
        assert_eq!(set.remove(&2), None);
        assert_eq!(set.size(), 1);
    }

    #[test]
    fn test_membership() {
        let mut set = TreapSet::new();
        set.insert(50);
        set.insert(30);
        set.insert(70);
        set.insert(20);

        assert_eq!(set.size(), 4);
        assert!(set.contains(&30));
        assert!(!set.contains(&99));

        set.remove(&30);
        assert!(!set.contains(&30));
        assert_eq!(set.size(), 3);
    }

    #[test]
    fn test_clear() {
        let mut set = TreapSet::new();
        set.insert(1);
        set.insert(2);
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(&1));

        set.insert(1);
        assert!(set.contains(&1));
        assert_eq!(set.size(), 1);
    }
}
