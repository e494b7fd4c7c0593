//! Fixed rollout, probe and naming values baked into desired specs.

/// Port the Jenkins UI listens on.
pub const UI_PORT: i32 = 8080;

/// Memory request floor for the main container.
pub const MEMORY_REQUEST: &str = "500Mi";

/// Suffix of the admin password secret, `<instance-name>-<suffix>`.
pub const PASSWORD_SECRET_SUFFIX: &str = "admin-password";

/// Key under which the password secret stores its value.
pub const PASSWORD_SECRET_KEY: &str = "password";

/// Upper bound on a recreate rollout.
pub const RECREATE_TIMEOUT_SECONDS: i64 = 600;

/// Upper bound on the total rollout duration.
pub const ROLLOUT_DEADLINE_SECONDS: i64 = 21_600;

/// Grace period before the pod is killed on shutdown.
pub const TERMINATION_GRACE_PERIOD_SECONDS: i64 = 30;

/// Where the persistent data volume is mounted.
pub const DATA_MOUNT_PATH: &str = "/var/lib/jenkins";

/// Readiness probe path on the UI port.
pub const READINESS_PATH: &str = "/login";

pub const INIT_CONTAINER_NAME: &str = "grant-permissions";
pub const INIT_CONTAINER_IMAGE: &str = "busybox";
