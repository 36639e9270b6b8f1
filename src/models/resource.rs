//! Static descriptors of the administrable server resources.
//!
//! Every resource lives under `/api/admin/<name>/`. Setting resources use
//! `setting[/{id}]` and `settings`; log resources use `log[/{id}]` and `logs`.

/// Shape of a resource's endpoints and payload keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Setting,
    Log,
}

/// How a list cell is rendered from a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Text,
    /// Epoch milliseconds rendered as UTC ISO-8601
    Timestamp,
    /// Object rendered as `key=value` lines
    Pairs,
    /// Array or newline string rendered as lines
    Lines,
}

/// One column of a list table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub field: &'static str,
    pub format: CellFormat,
}

const fn text(header: &'static str, field: &'static str) -> Column {
    Column {
        header,
        field,
        format: CellFormat::Text,
    }
}

const fn timestamp(header: &'static str, field: &'static str) -> Column {
    Column {
        header,
        field,
        format: CellFormat::Timestamp,
    }
}

const fn pairs(header: &'static str, field: &'static str) -> Column {
    Column {
        header,
        field,
        format: CellFormat::Pairs,
    }
}

const fn lines(header: &'static str, field: &'static str) -> Column {
    Column {
        header,
        field,
        format: CellFormat::Lines,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    /// Path segment under `/api/admin/`
    pub name: &'static str,
    /// Human label used in messages and table titles
    pub label: &'static str,
    /// Plural used for list titles and empty-list messages
    pub plural: &'static str,
    pub kind: ResourceKind,
    /// Field shown in the details table title
    pub title_field: &'static str,
    pub columns: &'static [Column],
}

impl Resource {
    fn root(&self, base_url: &str) -> String {
        format!("{}/api/admin/{}", base_url, self.name)
    }

    /// URL of a single item.
    pub fn item_path(&self, base_url: &str, id: &str) -> String {
        let segment = match self.kind {
            ResourceKind::Setting => "setting",
            ResourceKind::Log => "log",
        };
        format!("{}/{}/{}", self.root(base_url), segment, id)
    }

    /// URL that create and edit requests are sent to.
    pub fn write_path(&self, base_url: &str) -> String {
        format!("{}/setting", self.root(base_url))
    }

    pub fn list_path(&self, base_url: &str) -> String {
        let segment = match self.kind {
            ResourceKind::Setting => "settings",
            ResourceKind::Log => "logs",
        };
        format!("{}/{}", self.root(base_url), segment)
    }

    /// URL of a scheduler-style trigger such as `start` or `stop`.
    pub fn trigger_path(&self, base_url: &str, id: &str, trigger: &str) -> String {
        format!("{}/{}/{}", self.root(base_url), id, trigger)
    }

    /// Response key holding a single record.
    pub fn item_key(&self) -> &'static str {
        match self.kind {
            ResourceKind::Setting => "setting",
            ResourceKind::Log => "log",
        }
    }

    /// Response key holding a page of records.
    pub fn list_key(&self) -> &'static str {
        match self.kind {
            ResourceKind::Setting => "settings",
            ResourceKind::Log => "logs",
        }
    }

    pub fn operation(&self, verb: &str) -> String {
        format!("{} {}", verb, self.label)
    }
}

pub const ACCESS_TOKEN: Resource = Resource {
    name: "accesstoken",
    label: "AccessToken",
    plural: "AccessTokens",
    kind: ResourceKind::Setting,
    title_field: "name",
    columns: &[
        text("ID", "id"),
        text("NAME", "name"),
        text("EXPIRES", "expires"),
        lines("PERMISSIONS", "permissions"),
    ],
};

pub const BAD_WORD: Resource = Resource {
    name: "badword",
    label: "BadWord",
    plural: "BadWords",
    kind: ResourceKind::Setting,
    title_field: "id",
    columns: &[
        text("ID", "id"),
        text("SUGGEST_WORD", "suggest_word"),
        text("UPDATED_BY", "updated_by"),
        timestamp("UPDATED_TIME", "updated_time"),
        text("VERSION_NO", "version_no"),
    ],
};

pub const BOOST_DOC: Resource = Resource {
    name: "boostdoc",
    label: "BoostDoc",
    plural: "BoostDocs",
    kind: ResourceKind::Setting,
    title_field: "id",
    columns: &[
        text("ID", "id"),
        text("URL_EXPR", "url_expr"),
        text("BOOST_EXPR", "boost_expr"),
        text("SORT_ORDER", "sort_order"),
        text("UPDATED_BY", "updated_by"),
        timestamp("UPDATED_TIME", "updated_time"),
    ],
};

pub const DATA_CONFIG: Resource = Resource {
    name: "dataconfig",
    label: "DataConfig",
    plural: "DataConfigs",
    kind: ResourceKind::Setting,
    title_field: "name",
    columns: &[
        text("ID", "id"),
        text("NAME", "name"),
        text("AVAILABLE", "available"),
        text("SORT ORDER", "sort_order"),
    ],
};

pub const DUPLICATE_HOST: Resource = Resource {
    name: "duplicatehost",
    label: "DuplicateHost",
    plural: "DuplicateHosts",
    kind: ResourceKind::Setting,
    title_field: "id",
    columns: &[
        text("ID", "id"),
        text("REGULAR NAME", "regular_name"),
        text("DUPLICATE HOST NAME", "duplicate_host_name"),
        text("SORT ORDER", "sort_order"),
        text("UPDATED BY", "updated_by"),
        timestamp("UPDATED TIME", "updated_time"),
    ],
};

pub const ELEVATE_WORD: Resource = Resource {
    name: "elevateword",
    label: "ElevateWord",
    plural: "ElevateWords",
    kind: ResourceKind::Setting,
    title_field: "suggest_word",
    columns: &[
        text("ID", "id"),
        text("SUGGEST WORD", "suggest_word"),
        text("BOOST", "boost"),
        text("VERSION NO", "version_no"),
        text("UPDATED BY", "updated_by"),
        timestamp("UPDATED TIME", "updated_time"),
    ],
};

pub const FILE_AUTH: Resource = Resource {
    name: "fileauth",
    label: "FileAuth",
    plural: "FileAuths",
    kind: ResourceKind::Setting,
    title_field: "username",
    columns: &[
        text("ID", "id"),
        text("USERNAME", "username"),
        text("HOSTNAME", "hostname"),
        text("PORT", "port"),
        text("FILE_CONFIG ID", "file_config_id"),
    ],
};

pub const FILE_CONFIG: Resource = Resource {
    name: "fileconfig",
    label: "FileConfig",
    plural: "FileConfigs",
    kind: ResourceKind::Setting,
    title_field: "name",
    columns: &[text("ID", "id"), text("Name", "name")],
};

pub const GROUP: Resource = Resource {
    name: "group",
    label: "Group",
    plural: "Groups",
    kind: ResourceKind::Setting,
    title_field: "name",
    columns: &[
        text("ID", "id"),
        text("NAME", "name"),
        pairs("ATTRIBUTES", "attributes"),
        text("VERSION", "version_no"),
    ],
};

pub const KEY_MATCH: Resource = Resource {
    name: "keymatch",
    label: "KeyMatch",
    plural: "KeyMatches",
    kind: ResourceKind::Setting,
    title_field: "term",
    columns: &[
        text("ID", "id"),
        text("TERM", "term"),
        text("QUERY", "query"),
        text("BOOST", "boost"),
        text("MAX SIZE", "max_size"),
        text("UPDATED BY", "updated_by"),
        timestamp("UPDATED TIME", "updated_time"),
    ],
};

pub const LABEL_TYPE: Resource = Resource {
    name: "labeltype",
    label: "LabelType",
    plural: "LabelTypes",
    kind: ResourceKind::Setting,
    title_field: "name",
    columns: &[text("ID", "id"), text("NAME", "name"), text("VALUE", "value")],
};

pub const PATH_MAP: Resource = Resource {
    name: "pathmap",
    label: "PathMap",
    plural: "PathMaps",
    kind: ResourceKind::Setting,
    title_field: "regex",
    columns: &[
        text("ID", "id"),
        text("REGEX", "regex"),
        text("REPLACEMENT", "replacement"),
        text("PROCESS TYPE", "process_type"),
        text("SORT ORDER", "sort_order"),
        text("USER AGENT", "user_agent"),
    ],
};

pub const RELATED_CONTENT: Resource = Resource {
    name: "relatedcontent",
    label: "RelatedContent",
    plural: "RelatedContents",
    kind: ResourceKind::Setting,
    title_field: "term",
    columns: &[
        text("ID", "id"),
        text("TERM", "term"),
        text("CONTENT", "content"),
        text("VIRTUAL HOST", "virtual_host"),
        text("SORT ORDER", "sort_order"),
    ],
};

pub const RELATED_QUERY: Resource = Resource {
    name: "relatedquery",
    label: "RelatedQuery",
    plural: "RelatedQueries",
    kind: ResourceKind::Setting,
    title_field: "term",
    columns: &[
        text("ID", "id"),
        text("TERM", "term"),
        lines("QUERIES", "queries"),
        text("VIRTUAL HOST", "virtual_host"),
        text("VERSION", "version_no"),
    ],
};

pub const REQ_HEADER: Resource = Resource {
    name: "reqheader",
    label: "ReqHeader",
    plural: "ReqHeaders",
    kind: ResourceKind::Setting,
    title_field: "name",
    columns: &[
        text("ID", "id"),
        text("NAME", "name"),
        text("VALUE", "value"),
        text("WEB_CONFIG_ID", "web_config_id"),
    ],
};

pub const ROLE: Resource = Resource {
    name: "role",
    label: "Role",
    plural: "Roles",
    kind: ResourceKind::Setting,
    title_field: "name",
    columns: &[
        text("ID", "id"),
        text("NAME", "name"),
        pairs("ATTRIBUTES", "attributes"),
        text("VERSION", "version_no"),
    ],
};

pub const SCHEDULER: Resource = Resource {
    name: "scheduler",
    label: "Scheduler",
    plural: "Schedulers",
    kind: ResourceKind::Setting,
    title_field: "name",
    columns: &[
        text("ID", "id"),
        text("NAME", "name"),
        text("AVAILABLE", "available"),
        text("TARGET", "target"),
        text("CRON", "cron_expression"),
    ],
};

pub const USER: Resource = Resource {
    name: "user",
    label: "User",
    plural: "Users",
    kind: ResourceKind::Setting,
    title_field: "name",
    columns: &[
        text("ID", "id"),
        text("NAME", "name"),
        lines("ROLES", "roles"),
        lines("GROUPS", "groups"),
        pairs("ATTRIBUTES", "attributes"),
        text("VERSION", "version_no"),
    ],
};

pub const WEB_AUTH: Resource = Resource {
    name: "webauth",
    label: "WebAuth",
    plural: "WebAuths",
    kind: ResourceKind::Setting,
    title_field: "username",
    columns: &[
        text("ID", "id"),
        text("USERNAME", "username"),
        text("HOSTNAME", "hostname"),
        text("PORT", "port"),
        text("WEB_CONFIG ID", "web_config_id"),
    ],
};

pub const WEB_CONFIG: Resource = Resource {
    name: "webconfig",
    label: "WebConfig",
    plural: "WebConfigs",
    kind: ResourceKind::Setting,
    title_field: "name",
    columns: &[
        text("ID", "id"),
        text("NAME", "name"),
        text("AVAILABLE", "available"),
        text("SORT ORDER", "sort_order"),
    ],
};

pub const JOB_LOG: Resource = Resource {
    name: "joblog",
    label: "JobLog",
    plural: "JobLogs",
    kind: ResourceKind::Log,
    title_field: "job_name",
    columns: &[
        text("ID", "id"),
        text("NAME", "job_name"),
        text("STATUS", "job_status"),
        timestamp("START TIME", "start_time"),
        timestamp("END TIME", "end_time"),
    ],
};

pub const CRAWLING_INFO: Resource = Resource {
    name: "crawlinginfo",
    label: "CrawlingInfo",
    plural: "CrawlingInfos",
    kind: ResourceKind::Log,
    title_field: "session_id",
    columns: &[
        text("ID", "id"),
        text("SESSION ID", "session_id"),
        timestamp("CREATED TIME", "created_time"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8080";

    #[test]
    fn test_setting_paths() {
        assert_eq!(
            ROLE.item_path(BASE, "abc"),
            "http://localhost:8080/api/admin/role/setting/abc"
        );
        assert_eq!(
            ROLE.write_path(BASE),
            "http://localhost:8080/api/admin/role/setting"
        );
        assert_eq!(
            ROLE.list_path(BASE),
            "http://localhost:8080/api/admin/role/settings"
        );
        assert_eq!(ROLE.item_key(), "setting");
        assert_eq!(ROLE.list_key(), "settings");
    }

    #[test]
    fn test_log_paths() {
        assert_eq!(
            JOB_LOG.item_path(BASE, "j1"),
            "http://localhost:8080/api/admin/joblog/log/j1"
        );
        assert_eq!(
            CRAWLING_INFO.list_path(BASE),
            "http://localhost:8080/api/admin/crawlinginfo/logs"
        );
        assert_eq!(JOB_LOG.item_key(), "log");
        assert_eq!(JOB_LOG.list_key(), "logs");
    }

    #[test]
    fn test_trigger_path() {
        assert_eq!(
            SCHEDULER.trigger_path(BASE, "s1", "start"),
            "http://localhost:8080/api/admin/scheduler/s1/start"
        );
    }

    #[test]
    fn test_every_resource_lists_an_id_column() {
        let all = [
            ACCESS_TOKEN,
            BAD_WORD,
            BOOST_DOC,
            DATA_CONFIG,
            DUPLICATE_HOST,
            ELEVATE_WORD,
            FILE_AUTH,
            FILE_CONFIG,
            GROUP,
            KEY_MATCH,
            LABEL_TYPE,
            PATH_MAP,
            RELATED_CONTENT,
            RELATED_QUERY,
            REQ_HEADER,
            ROLE,
            SCHEDULER,
            USER,
            WEB_AUTH,
            WEB_CONFIG,
            JOB_LOG,
            CRAWLING_INFO,
        ];
        for resource in all {
            assert_eq!(resource.columns[0].field, "id", "{}", resource.name);
        }
    }
}
