//! Unit tests mirroring the library module tree

mod board;
