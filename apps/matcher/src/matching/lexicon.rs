//! Static lexicons backing the keyword pipeline.
//!
//! All three sets are process-wide, read-only, and initialized on first use.
//! Nothing ever mutates them, so any number of concurrent requests may read
//! them without coordination.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Baseline stopwords: function words plus the HR/legal/fluff vocabulary that
/// dominates job postings but carries no matching signal.
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // articles / auxiliaries
        "the", "a", "an", "and", "or", "if", "then", "than", "is", "am", "are", "was", "were",
        "be", "been", "being",
        // prepositions
        "in", "to", "of", "on", "at", "by", "as", "for", "from", "with", "into", "onto", "over",
        "under", "within", "without", "between", "among", "through", "throughout", "across",
        "about", "via", "per",
        // pronouns / determiners
        "i", "me", "my", "we", "our", "ours", "you", "your", "yours", "they", "their", "theirs",
        "it", "its", "this", "that", "these", "those",
        // posting boilerplate, HR and legal vocabulary
        "etc", "using", "use", "job", "role", "position", "team", "based", "related", "field",
        "fields", "experience", "years", "description", "responsibilities", "requirements",
        "preferred", "minimum", "posting", "apply", "req", "requisition", "id", "jobid", "ref",
        "company", "inc", "llc", "ltd", "corp", "corporation", "co", "gmbh", "plc", "pte", "llp",
        "us", "u.s", "u.s.", "usa",
        // generic fluff
        "strong", "exceptional", "excellent", "ability", "abilities", "communicate",
        "communication", "effectively", "familiar", "familiarity", "knowledge", "skills",
        "skill", "objective", "objectives", "plus", "good", "great", "must", "build", "work",
        "tools", "technology", "technologies", "environment",
        "analytical", "probability", "statistic", "statistics", "complex", "highly",
        "technical", "collaborative", "collaboration", "intellectual", "curiosity", "passion",
        "solving", "challenging", "problem", "problems",
        // tokens that show up inside organization names
        "labs", "lab",
    ]
    .into_iter()
    .collect()
});

/// Names that end in `s` (or otherwise look plural) but must never be
/// singularized. Stripping the final `s` from `kubernetes` or `aws` would
/// corrupt the keyword, so these take precedence over every suffix rule.
pub static PLURAL_EXCEPTIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // cloud platforms and managed services
        "aws", "gcp", "azure", "s3", "ec2", "eks", "ecs", "rds", "kms", "sns", "sqs", "iam",
        "route53", "cloudwatch", "cloudformation", "gcs", "bigquery", "dataproc", "dataflow",
        "pubsub", "vertexai", "cloudrun",
        // databases, warehouses, search
        "postgres", "postgresql", "mysql", "sqlite", "mariadb", "sqlserver", "dynamodb",
        "mongodb", "cassandra", "neo4j", "couchbase", "hbase", "clickhouse", "timescaledb",
        "influxdb", "snowflake", "redshift", "elasticsearch", "opensearch",
        // streaming and data engineering
        "kafka", "kinesis", "pulsar", "zookeeper", "spark", "flink", "beam", "hive", "presto",
        "trino", "dbt", "airbyte", "fivetran", "iceberg", "delta", "delta-lake",
        // ML / data science
        "python", "pandas", "numpy", "scipy", "sklearn", "scikit-learn", "matplotlib",
        "seaborn", "pytorch", "tensorflow", "keras", "xgboost", "lightgbm", "catboost",
        "spacy", "nltk", "transformers", "huggingface", "onnx", "mlflow", "kubeflow",
        "sagemaker",
        // observability
        "prometheus", "grafana", "opentelemetry", "jaeger",
        // web, frontend, backend
        "nodejs", "express", "nestjs", "nextjs", "react", "angular", "vue", "svelte", "axios",
        "chartjs", "tailwindcss", "webpack",
        // APIs and protocols
        "graphql", "rest", "grpc", "websockets", "microservices", "k8s",
        // devops and platforms
        "devops", "jenkins", "gitlab", "github", "bitbucket", "circleci", "docker",
        "kubernetes",
        // misc
        "redis", "analytics", "physics", "metrics", "hadoop", "airflow", "h1b",
    ]
    .into_iter()
    .collect()
});

/// Two-letter tokens worth keeping; every other two-letter token is noise.
pub static ALLOWED_TWO_LETTER: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["ai", "ml", "ui", "ux", "go"].into_iter().collect());
