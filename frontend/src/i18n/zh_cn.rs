pub mod common {
    pub const BRAND_NAME: &str = "SciCover";
    pub const BRAND_TAGLINE: &str = "顶刊封面故事 · 双语速览";
    pub const LOADING: &str = "加载中...";
    pub const ARROW_RIGHT: &str = "→";
}

pub mod loading_spinner {
    pub const ARIA_LABEL: &str = "Loading";
}

pub mod error_banner {
    pub const TITLE: &str = "发生错误";
}

pub mod header {
    pub const NAV_HOME: &str = "首页";
    pub const NAV_ARCHIVE: &str = "归档";
    pub const NAV_MAIN_ARIA: &str = "主导航";
}

pub mod footer {
    pub const NOTE: &str = "封面与图片版权归各期刊所有，摘要由自动流水线生成。";
}

pub mod home {
    pub const HERO_LABEL: &str = "最新封面";
    pub const READ_MORE: &str = "阅读全文";
    pub const ALL_JOURNALS: &str = "全部期刊";
    pub const GRID_TITLE: &str = "往期封面";
    pub const EMPTY: &str = "暂无封面故事。";
    pub const EMPTY_JOURNAL_TEMPLATE: &str = "{} 暂无更多封面故事。";
}

pub mod article_detail {
    pub const BACK: &str = "返回首页";
    pub const LANG_BOTH: &str = "双语";
    pub const LANG_ZH: &str = "中文";
    pub const LANG_EN: &str = "English";
    pub const ISSUE_TEMPLATE: &str = "第 {} 卷 · 第 {} 期";
    pub const COVER_CREDIT_TEMPLATE: &str = "封面图片：{}";
    pub const KEY_ARTICLE: &str = "封面文章";
    pub const AUTHORS: &str = "作者";
    pub const PAGES: &str = "页码";
    pub const GALLERY: &str = "图集";
    pub const LINKS: &str = "相关链接";
    pub const LINK_OFFICIAL: &str = "期刊官网";
    pub const LINK_DOI: &str = "DOI";
    pub const LINK_PREPRINT: &str = "预印本";
    pub const MODE_FULL_TEXT: &str = "基于全文";
    pub const MODE_ABSTRACT_ONLY: &str = "仅基于摘要";
    pub const EMPTY_SUMMARY: &str = "该语言暂无摘要。";
}

pub mod archive {
    pub const TITLE: &str = "封面归档";
    pub const YEAR_LABEL: &str = "年份";
    pub const MONTH_LABEL: &str = "月份";
    pub const ALL_YEARS: &str = "全部年份";
    pub const ALL_MONTHS: &str = "全部";
    pub const MONTH_TEMPLATE: &str = "{}月";
    pub const COUNT_TEMPLATE: &str = "共 {} 篇";
    pub const EMPTY: &str = "所选时间段没有封面故事。";
    pub const UNDATED_TITLE: &str = "日期未知";
}

pub mod not_found {
    pub const TITLE: &str = "404 - 页面未找到";
    pub const DESCRIPTION: &str = "抱歉，你访问的页面不存在。";
    pub const BACK_HOME: &str = "返回首页";
}
