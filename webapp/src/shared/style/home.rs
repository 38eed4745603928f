pub const HOME_STYLES: &str = r#"
/* Page sections */
section {
  padding: var(--space-16) 0;
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.section-title {
  font-size: 2rem;
  margin-bottom: var(--space-8);
  text-align: center;
}

/* Hero */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
}

.hero-title {
  font-size: 3rem;
  font-weight: 700;
}

.hero-subtitle {
  color: var(--color-text-muted);
  font-size: 1.25rem;
  margin: var(--space-4) 0 var(--space-8);
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
}

/* About */
.about-content {
  color: var(--color-text-muted);
  max-width: 720px;
  margin: 0 auto var(--space-8);
  text-align: center;
}

.highlights {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: var(--space-6);
}

.highlight-card {
  background-color: var(--color-surface);
  border-radius: var(--radius);
  padding: var(--space-6);
}

/* Projects */
.filter-container {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-3);
  margin-bottom: var(--space-8);
}

.filter-btn {
  padding: var(--space-2) var(--space-4);
  border-radius: 999px;
  border: 1px solid var(--color-border);
  background: none;
  color: var(--color-text-muted);
  cursor: pointer;
}

.filter-btn.active {
  background-color: var(--color-primary);
  border-color: var(--color-primary);
  color: #fff;
}

.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: var(--space-6);
}

.projects-message {
  grid-column: 1 / -1;
  text-align: center;
  color: var(--color-text-muted);
}

.project-card {
  display: flex;
  flex-direction: column;
  background-color: var(--color-surface);
  border-radius: var(--radius);
  overflow: hidden;
  cursor: pointer;
  height: 100%;
}

.project-card-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: var(--space-4);
}

.project-category {
  font-size: 0.75rem;
  padding: var(--space-1) var(--space-3);
  border-radius: 999px;
  color: #fff;
}

.project-category.n8n, .modal-category.n8n { background-color: var(--category-n8n); }
.project-category.github, .modal-category.github { background-color: var(--category-github); }
.project-category.ai, .modal-category.ai { background-color: var(--category-ai); }
.project-category.tool, .modal-category.tool { background-color: var(--category-tool); }

.project-github-link {
  color: var(--color-text-muted);
}

.project-image {
  aspect-ratio: 16 / 9;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: var(--color-surface-raised);
}

.project-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.project-image-placeholder {
  color: var(--color-text-muted);
}

.project-card-body {
  flex: 1;
  padding: var(--space-4);
}

.project-desc {
  color: var(--color-text-muted);
  margin: var(--space-2) 0 var(--space-4);
}

.project-metrics,
.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-bottom: var(--space-2);
}

.metric-tag {
  font-size: 0.75rem;
  color: var(--color-primary);
}

.tech-tag {
  font-size: 0.75rem;
  padding: var(--space-1) var(--space-2);
  border: 1px solid var(--color-border);
  border-radius: 6px;
}

.project-card-footer {
  padding: 0 var(--space-4) var(--space-4);
}

.project-btn {
  width: 100%;
  padding: var(--space-2);
  border-radius: 8px;
  border: 1px solid var(--color-secondary);
  background: none;
  color: var(--color-secondary);
  cursor: pointer;
}

/* Skills */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: var(--space-6);
}

.skill-category {
  background-color: var(--color-surface);
  border-radius: var(--radius);
  padding: var(--space-6);
}

.skill-item {
  margin-top: var(--space-4);
}

.skill-info {
  display: flex;
  justify-content: space-between;
  margin-bottom: var(--space-1);
}

.skill-bar {
  height: 8px;
  border-radius: 4px;
  background-color: var(--color-surface-raised);
  overflow: hidden;
}

.skill-progress {
  width: 0;
  height: 100%;
  background: linear-gradient(90deg, var(--color-primary), var(--color-accent));
  transition: width 1s ease;
}

/* Contact and footer */
.contact-content {
  text-align: center;
}

.contact-links {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
  margin-top: var(--space-6);
}

.footer {
  padding: var(--space-8) 0;
  text-align: center;
  color: var(--color-text-muted);
  border-top: 1px solid var(--color-border);
}
"#;
