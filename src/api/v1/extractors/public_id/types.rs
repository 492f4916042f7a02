/**
 * Responsibility
 *
 * 主な責務
 *  - リソースごとの「意味付きID型」を宣言する
 *
 * 置くもの
 *  - BookmarkTag などのタグ型
 *  - type PublicBookmarkId = PublicId<BookmarkTag> のような alias
 *
 * 置かないもの
 *  - decode ロジック
 *  - extractor 実装
 */
use super::core::PublicId;

// bookmarks
pub enum BookmarkTag {}
pub type PublicBookmarkId = PublicId<BookmarkTag>;
