// tests/common/fixtures.rs
//! テスト用 C ソース

use super::TempDir;

/// while 1 / do-while 1 / for 2
pub const MIXED_LOOPS: &str = r#"
int main(void) {
    int i = 0, n = 3;
    while (i < n) { i++; }
    do { i--; } while (i > 0);
    for (i = 0; i < n; i++) {}
    for (;;) { break; }
    return 0;
}
"#;

/// while 1 のみ
pub const ONE_WHILE: &str = "void f(int n) { while (n--) ; }\n";

/// ループ無し
pub const NO_LOOPS: &str = "struct point { int x, y; };\nint add(int a, int b) { return a + b; }\n";

/// 閉じ括弧が欠けたファイル
pub const BROKEN: &str = "int main(void) {\n    for (int i = 0; i < ; i++ {\n";

/// 典型的なソースツリー:
///
/// - `a.c`: for 2
/// - `sub/b.c`: while 3 / do-while 1
/// - `sub/notes.txt`, `sub/b.h`: 対象外
#[allow(dead_code)]
pub fn sample_tree() -> TempDir {
    let dir = TempDir::new("count_loops_sample");
    dir.write_file("a.c", "void f(void) { for (;;) break; for (;;) break; }\n");
    dir.write_file(
        "sub/b.c",
        "void g(int n) { while (n) n--; while (n) n--; while (n) n--; do { n++; } while (n < 3); }\n",
    );
    dir.write_file("sub/notes.txt", "while (1) {}\n");
    dir.write_file("sub/b.h", "static void h(void) { for (;;) break; }\n");
    dir
}
