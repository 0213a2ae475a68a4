//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::CatalogTitle, "Amana 花卉");

    // Loading / errors
    m.insert(Key::Loading, "正在加载花卉...");
    m.insert(Key::LoadFailed, "花卉加载失败，请稍后再试。");
    m.insert(Key::Retry, "重试");

    // Search & filters
    m.insert(Key::SearchPlaceholder, "搜索花卉...");
    m.insert(Key::FilterAll, "全部");
    m.insert(Key::FilterAvailable, "有货");
    m.insert(Key::FilterUnavailable, "缺货");
    m.insert(Key::ResultCount, "种花卉");

    // Empty state
    m.insert(Key::EmptyCollection, "暂无花卉。");
    m.insert(Key::EmptyFiltered, "没有符合条件的花卉。");
    m.insert(Key::ClearFilters, "清除筛选");

    // Availability switch tooltip
    m.insert(Key::FlowersAvailable, "花卉有货");
    m.insert(Key::FlowersUnavailable, "花卉缺货");

    // Pagination
    m.insert(Key::PreviousPage, "上一页");
    m.insert(Key::NextPage, "下一页");

    // Preview overlay
    m.insert(Key::Close, "关闭");

    // Header toggles
    m.insert(Key::ToggleDarkMode, "深色模式");
    m.insert(Key::ToggleLightMode, "浅色模式");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
