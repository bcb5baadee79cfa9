xflags::xflags! {
    cmd xtask {
        /// Format, fix and lint the whole workspace
        cmd fix {}
        /// Re-run checks whenever a file changes
        cmd watch {}
        /// Run the workspace tests
        cmd test {}
        /// Run the large collection scenario with optimizations on
        cmd scale {
            /// Number of integers to add and remove
            optional -i, --items items: usize
        }
    }
}
