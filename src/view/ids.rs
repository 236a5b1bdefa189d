//! Element ids and classes shared between the controller and the page markup

pub const OUTPUT: &str = "output";
pub const DROP_ZONE: &str = "dropZone";
pub const RESUME_FILE: &str = "resumeFile";
pub const FILE_NAME: &str = "fileName";
pub const JOB_ROLE: &str = "jobRole";
pub const UPLOAD_FORM: &str = "uploadForm";
pub const RESULTS_AREA: &str = "resultsArea";
pub const ANALYZE_BUTTON: &str = "analyzeBtn";
pub const BUTTON_LOADER: &str = "btnLoader";
pub const SEARCH_JOBS_BUTTON: &str = "searchJobsBtn";
pub const JOB_LOCATION: &str = "jobLocation";
pub const JOB_RESULTS: &str = "jobResults";
pub const JOB_LOADER: &str = "jobLoader";
pub const MATCH_COMMENT: &str = "matchComment";
pub const MISSING_SKILLS_LIST: &str = "missingSkillsList";
pub const MATCHED_SKILLS_LIST: &str = "matchedSkillsList";
pub const CANDIDATE_INFO: &str = "candidateInfo";
pub const TIPS_LIST: &str = "tipsList";
pub const RECOMMENDATION_LIST: &str = "recommendationList";

pub const ANALYZE_BUTTON_CLASS: &str = "analyze-btn";
pub const CIRCLE_CLASS: &str = "circle";
pub const PERCENTAGE_CLASS: &str = "percentage";
pub const UPLOAD_TEXT_CLASS: &str = "upload-text";

/// Every id the page markup carries.
pub const ALL_IDS: [&str; 19] = [
    OUTPUT,
    DROP_ZONE,
    RESUME_FILE,
    FILE_NAME,
    JOB_ROLE,
    UPLOAD_FORM,
    RESULTS_AREA,
    ANALYZE_BUTTON,
    BUTTON_LOADER,
    SEARCH_JOBS_BUTTON,
    JOB_LOCATION,
    JOB_RESULTS,
    JOB_LOADER,
    MATCH_COMMENT,
    MISSING_SKILLS_LIST,
    MATCHED_SKILLS_LIST,
    CANDIDATE_INFO,
    TIPS_LIST,
    RECOMMENDATION_LIST,
];

pub const ALL_CLASSES: [&str; 4] = [ANALYZE_BUTTON_CLASS, CIRCLE_CLASS, PERCENTAGE_CLASS, UPLOAD_TEXT_CLASS];
