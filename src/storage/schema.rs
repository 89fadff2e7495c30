pub(super) const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS accounts (
    user_id        INTEGER PRIMARY KEY,
    display_name   TEXT NOT NULL,
    email          TEXT NOT NULL,
    username       TEXT NOT NULL,
    gravatar_url   TEXT,
    profile_url    TEXT,
    email_verified INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS devices (
    device_id  INTEGER PRIMARY KEY,
    user_id    INTEGER NOT NULL,
    name       TEXT NOT NULL,
    model      TEXT NOT NULL,
    os_version TEXT
);
CREATE INDEX IF NOT EXISTS idx_devices_user ON devices(user_id);

CREATE TABLE IF NOT EXISTS events (
    event_id    INTEGER PRIMARY KEY,
    user_id     INTEGER NOT NULL,
    category_id INTEGER,
    title       TEXT NOT NULL,
    description TEXT,
    location    TEXT,
    starts_at   TEXT NOT NULL,
    ends_at     TEXT
);
CREATE INDEX IF NOT EXISTS idx_events_user ON events(user_id);
";
