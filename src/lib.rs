pub mod tree;
pub mod source;
pub mod shell;
pub mod config;
pub mod error;

pub use tree::AvlTree;
pub use error::{Error, Result};

#[macro_export(local_inner_macros)]
macro_rules! avltree {
    ($($key:expr,)+) => { avltree!($($key),+) };
    ($($key:expr),*) => {
        {
            let mut _tree = $crate::AvlTree::new();
            $(
                _tree.insert($key);
            )*
            _tree
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn avltree_macro() {
        let tree = avltree! {
            1,
            3,
            2, // trailing comma
        };

        let keys: Vec<_> = tree.iter_inorder().copied().collect();
        assert_eq!(&keys, &[1, 2, 3]);

        // No trailing comma, duplicates kept
        let tree = avltree!["b", "a", "b"];

        let keys: Vec<_> = tree.iter_inorder().copied().collect();
        assert_eq!(&keys, &["a", "b", "b"]);

        // Zero items
        let tree = avltree!();

        let keys: Vec<i32> = tree.iter_inorder().copied().collect();
        assert_eq!(&keys, &[]);
    }
}
