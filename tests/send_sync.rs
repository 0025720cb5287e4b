//! Auto trait checks for the public types. The tree owns its nodes through `Box`, so every type
//! is `Send`/`Sync` exactly when its key type is.

#![warn(rust_2018_idioms)]

use std::cell::Cell;
use std::rc::Rc;

use static_assertions::{assert_impl_all, assert_not_impl_any};

use avl::AvlTree;
use avl::tree::{IterInorder, IterLevelOrder, IterPreorder, Node, Render};

assert_impl_all!(AvlTree<i32>: Send, Sync);
assert_impl_all!(AvlTree<String>: Send, Sync);
assert_not_impl_any!(AvlTree<Rc<i32>>: Send, Sync);
assert_impl_all!(AvlTree<Cell<i32>>: Send);
assert_not_impl_any!(AvlTree<Cell<i32>>: Sync);

assert_impl_all!(Node<i32>: Send, Sync);
assert_not_impl_any!(Node<Rc<i32>>: Send, Sync);
assert_impl_all!(Node<Cell<i32>>: Send);
assert_not_impl_any!(Node<Cell<i32>>: Sync);

// Iterators hold shared references, so they need `K: Sync` to be `Send`
assert_impl_all!(IterPreorder<'static, i32>: Send, Sync);
assert_not_impl_any!(IterPreorder<'static, Rc<i32>>: Send, Sync);
assert_not_impl_any!(IterPreorder<'static, Cell<i32>>: Send, Sync);

assert_impl_all!(IterInorder<'static, i32>: Send, Sync);
assert_not_impl_any!(IterInorder<'static, Rc<i32>>: Send, Sync);
assert_not_impl_any!(IterInorder<'static, Cell<i32>>: Send, Sync);

assert_impl_all!(IterLevelOrder<'static, i32>: Send, Sync);
assert_not_impl_any!(IterLevelOrder<'static, Rc<i32>>: Send, Sync);
assert_not_impl_any!(IterLevelOrder<'static, Cell<i32>>: Send, Sync);

assert_impl_all!(Render<'static, String>: Send, Sync);
assert_not_impl_any!(Render<'static, Cell<i32>>: Send, Sync);
