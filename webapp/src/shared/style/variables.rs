pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --color-primary: #F97316;      /* pain points, call to action */
  --color-secondary: #38BDF8;    /* section keywords, links */
  --color-accent: #A78BFA;

  --color-bg: #0F172A;
  --color-surface: #1E293B;
  --color-surface-raised: #273449;
  --color-border: #334155;

  --color-text: #F1F5F9;
  --color-text-muted: #94A3B8;

  /* Category badges */
  --category-n8n: #EA4B71;
  --category-github: #6E7681;
  --category-ai: #10B981;
  --category-tool: #F59E0B;

  /* Spacing */
  --space-1: 0.25rem;
  --space-2: 0.5rem;
  --space-3: 0.75rem;
  --space-4: 1rem;
  --space-6: 1.5rem;
  --space-8: 2rem;
  --space-12: 3rem;
  --space-16: 4rem;

  /* Layout */
  --header-height: 72px;
  --container-width: 1120px;
  --radius: 12px;
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.35);
  --transition: 0.3s ease;
}
"#;
