extern crate pod_compare;

use pod_compare::{pod_compare, Pod, PodEq};

#[derive(Clone, Copy, Pod)]
struct Foo {
    a: i16,
    b: u32,
    c: [u8; 8],
    d: [u16; 4],
}

impl PartialEq for Foo {
    fn eq(&self, other: &Foo) -> bool {
        pod_compare!(*self, *other, a, b, c, d)
    }
}

#[derive(Clone, Copy, Pod, PodEq)]
struct Bar {
    a: u16,
    b: u32,
    c: [u8; 8],
    d: [u16; 4],
}

fn main() {
    let foo = |a, b| Foo { a, b, c: [1, 1, 0, 0, 0, 0, 0, 0], d: [0; 4] };
    let (lhs, rhs) = (foo(1, 1), foo(1, 1));
    if lhs == rhs {
        println!("same");
    }

    let bar = |a, b| Bar { a, b, c: [1, 1, 0, 0, 0, 0, 0, 0], d: [0; 4] };
    let (lhs, rhs) = (bar(1, 1), bar(1, 1));
    if lhs == rhs {
        println!("same");
    }
}
