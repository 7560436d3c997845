//! Global CSS styles for the PakTechnology site.
//!
//! Clean agency look: white surfaces, green primary, navy ink, amber accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BRAND */
  --green: #0b8f5a;
  --green-dark: #087047;
  --green-soft: #e7f6ef;
  --navy: #0f172a;
  --navy-soft: #1e293b;
  --amber: #f5a524;
  --amber-soft: #fff4de;

  /* SURFACES */
  --surface: #ffffff;
  --surface-alt: #f8fafc;
  --border: #e2e8f0;

  /* TEXT */
  --text-primary: #0f172a;
  --text-secondary: #475569;
  --text-muted: #94a3b8;
  --text-inverse: #f8fafc;

  /* SEMANTIC */
  --danger: #dc2626;
  --danger-soft: #fef2f2;
  --info: #2563eb;
  --info-soft: #eff6ff;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, -apple-system, sans-serif;
  --font-urdu: 'Noto Nastaliq Urdu', 'Jameel Noori Nastaleeq', serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Shape */
  --radius-sm: 6px;
  --radius: 12px;
  --radius-lg: 20px;
  --shadow: 0 1px 3px rgba(15, 23, 42, 0.08), 0 8px 24px rgba(15, 23, 42, 0.06);
  --shadow-lg: 0 12px 40px rgba(15, 23, 42, 0.14);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.6;
  color: var(--text-primary);
  background: var(--surface);
  -webkit-font-smoothing: antialiased;
}

a {
  color: var(--green);
  text-decoration: none;
}

a:hover {
  color: var(--green-dark);
}

ul, ol {
  list-style: none;
}

img, iframe {
  max-width: 100%;
  display: block;
}

:focus-visible {
  outline: 2px solid var(--amber);
  outline-offset: 2px;
}

/* === Layout === */
.site-root {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.site-root[dir="rtl"] {
  font-family: var(--font-urdu), var(--font-sans);
}

.site-main {
  flex: 1;
}

.container {
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.container.narrow {
  max-width: 820px;
}

.section {
  padding: 5rem 0;
}

.section:nth-of-type(even) {
  background: var(--surface-alt);
}

/* === Section Header === */
.section-header {
  max-width: 720px;
  margin-bottom: 3rem;
}

.section-header.centered {
  margin-left: auto;
  margin-right: auto;
  text-align: center;
}

.section-eyebrow {
  display: inline-block;
  font-size: var(--text-sm);
  font-weight: 600;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--green);
  margin-bottom: 0.75rem;
}

.section-title {
  font-size: var(--text-2xl);
  line-height: 1.2;
  color: var(--navy);
}

.section-subtitle {
  margin-top: 1rem;
  font-size: var(--text-lg);
  color: var(--text-secondary);
}

.reveal {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.reveal.revealed {
  opacity: 1;
  transform: none;
}

@media (prefers-reduced-motion: reduce) {
  .reveal {
    opacity: 1;
    transform: none;
    transition: none;
  }
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border: 2px solid transparent;
  border-radius: var(--radius-sm);
  font-family: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast),
    border-color var(--transition-fast), transform var(--transition-fast);
  white-space: nowrap;
}

.btn:hover:not([disabled]):not([aria-disabled="true"]) {
  transform: translateY(-1px);
}

.btn[disabled], .btn[aria-disabled="true"] {
  opacity: 0.55;
  cursor: not-allowed;
}

.btn-sm { padding: 0.375rem 0.875rem; font-size: var(--text-sm); }
.btn-md { padding: 0.625rem 1.25rem; font-size: var(--text-base); }
.btn-lg { padding: 0.875rem 1.75rem; font-size: var(--text-lg); }

.btn-primary {
  background: var(--green);
  color: #fff;
}

.btn-primary:hover {
  background: var(--green-dark);
  color: #fff;
}

.btn-secondary {
  background: var(--amber);
  color: var(--navy);
}

.btn-secondary:hover {
  background: #e0931a;
  color: var(--navy);
}

.btn-outline {
  background: transparent;
  border-color: var(--green);
  color: var(--green);
}

.btn-outline:hover {
  background: var(--green-soft);
}

.btn-ghost {
  background: transparent;
  color: var(--green);
  padding-left: 0;
  padding-right: 0;
}

.btn-icon {
  display: inline-flex;
}

.btn-loading .btn-label {
  opacity: 0.8;
}

.btn-spinner {
  width: 1em;
  height: 1em;
  border: 2px solid currentColor;
  border-right-color: transparent;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.75rem;
  height: 2.75rem;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--navy);
  font-size: var(--text-xl);
  cursor: pointer;
  box-shadow: var(--shadow);
  transition: background var(--transition-fast);
}

.icon-btn:hover {
  background: var(--green-soft);
}

.close-btn {
  width: 2rem;
  height: 2rem;
  box-shadow: none;
  border: none;
  background: transparent;
  font-size: var(--text-lg);
}

/* === Category Pills === */
.category-pills {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.5rem;
  margin-bottom: 2.5rem;
}

.pill {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1.125rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  background: var(--surface);
  color: var(--text-secondary);
  font-family: inherit;
  font-weight: 500;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.pill:hover {
  border-color: var(--green);
  color: var(--green);
}

.pill.selected {
  background: var(--green);
  border-color: var(--green);
  color: #fff;
}

.pill-count {
  font-size: var(--text-xs);
  padding: 0 0.5rem;
  border-radius: 999px;
  background: rgba(15, 23, 42, 0.08);
}

.pill.selected .pill-count {
  background: rgba(255, 255, 255, 0.25);
}

/* === Cards === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.5rem;
}

.card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.75rem;
  box-shadow: var(--shadow);
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.card-title {
  font-size: var(--text-lg);
  color: var(--navy);
}

.card-text {
  color: var(--text-secondary);
}

.feature-list {
  display: flex;
  flex-direction: column;
  gap: 0.375rem;
  margin-top: 0.5rem;
}

.feature-item {
  font-size: var(--text-sm);
  color: var(--text-secondary);
  padding-inline-start: 1.5rem;
  position: relative;
}

.feature-item::before {
  content: "\2713";
  position: absolute;
  inset-inline-start: 0;
  color: var(--green);
  font-weight: 700;
}

.service-icon, .reason-icon {
  font-size: var(--text-2xl);
  width: 3.5rem;
  height: 3.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius);
  background: var(--green-soft);
}

/* === Forms === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.375rem;
  margin-bottom: 1.25rem;
}

.form-label {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--navy);
}

.form-required {
  color: var(--danger);
}

.form-input {
  width: 100%;
  padding: 0.75rem 1rem;
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
  font-family: inherit;
  font-size: var(--text-base);
  color: var(--text-primary);
  background: var(--surface);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.form-input:focus {
  outline: none;
  border-color: var(--green);
  box-shadow: 0 0 0 3px var(--green-soft);
}

.form-input.invalid {
  border-color: var(--danger);
  box-shadow: 0 0 0 3px var(--danger-soft);
}

.form-input[disabled] {
  background: var(--surface-alt);
}

.form-textarea {
  resize: vertical;
  min-height: 8rem;
}

/* === Toasts === */
.toast {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 1rem;
  padding: 1rem 1.25rem;
  margin-bottom: 1.5rem;
  border-radius: var(--radius-sm);
  border-inline-start: 4px solid;
  animation: toast-in var(--transition-normal);
}

.toast-success {
  background: var(--green-soft);
  border-color: var(--green);
}

.toast-error {
  background: var(--danger-soft);
  border-color: var(--danger);
}

.toast-info {
  background: var(--info-soft);
  border-color: var(--info);
}

.toast-message {
  color: var(--navy);
}

@keyframes toast-in {
  from { opacity: 0; transform: translateY(-8px); }
  to { opacity: 1; transform: none; }
}

/* === Navigation Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 50;
  background: rgba(255, 255, 255, 0.92);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--border);
}

.nav-inner {
  display: flex;
  align-items: center;
  gap: 2rem;
  height: 4.5rem;
}

.nav-brand {
  display: flex;
  align-items: center;
  gap: 0.625rem;
  font-weight: 800;
  font-size: var(--text-lg);
  color: var(--navy);
}

.nav-brand-mark {
  width: 2.25rem;
  height: 2.25rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-sm);
  background: var(--green);
  color: #fff;
}

.nav-links {
  display: flex;
  gap: 1.75rem;
  margin-inline-start: auto;
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: 0.25rem 0;
  border-bottom: 2px solid transparent;
}

.nav-link:hover {
  color: var(--navy);
}

.nav-link.active {
  color: var(--green);
  border-bottom-color: var(--green);
}

.nav-toggle {
  display: none;
  flex-direction: column;
  gap: 4px;
  background: none;
  border: none;
  cursor: pointer;
  margin-inline-start: auto;
}

.nav-toggle-bar {
  width: 22px;
  height: 2px;
  background: var(--navy);
}

.locale-switcher {
  display: flex;
  border: 1px solid var(--border);
  border-radius: 999px;
  overflow: hidden;
}

.locale-option {
  padding: 0.25rem 0.75rem;
  background: transparent;
  border: none;
  font-family: inherit;
  font-size: var(--text-sm);
  color: var(--text-secondary);
  cursor: pointer;
}

.locale-option.active {
  background: var(--navy);
  color: var(--text-inverse);
}

@media (max-width: 860px) {
  .nav-toggle {
    display: flex;
  }

  .nav-links {
    display: none;
    position: absolute;
    top: 4.5rem;
    inset-inline: 0;
    flex-direction: column;
    gap: 0;
    padding: 1rem 1.5rem;
    background: var(--surface);
    border-bottom: 1px solid var(--border);
    box-shadow: var(--shadow);
  }

  .nav-links.open {
    display: flex;
  }

  .nav-link {
    padding: 0.75rem 0;
  }
}

/* === Footer === */
.site-footer {
  background: var(--navy);
  color: var(--text-inverse);
  padding-top: 4rem;
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr 1fr 1.5fr;
  gap: 3rem;
  padding-bottom: 3rem;
}

.footer-title {
  font-size: var(--text-xl);
  margin-bottom: 0.75rem;
}

.footer-tagline {
  color: var(--text-muted);
}

.footer-heading {
  font-size: var(--text-sm);
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--amber);
  margin-bottom: 1rem;
}

.footer-links ul, .footer-contact ul {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.footer-link, .footer-contact a {
  color: var(--text-inverse);
  opacity: 0.8;
}

.footer-link:hover, .footer-contact a:hover {
  color: #fff;
  opacity: 1;
}

.footer-channel {
  display: flex;
  gap: 0.5rem;
}

.footer-bottom {
  padding: 1.5rem;
  border-top: 1px solid var(--navy-soft);
  font-size: var(--text-sm);
  color: var(--text-muted);
}

@media (max-width: 860px) {
  .footer-grid {
    grid-template-columns: 1fr;
  }
}

/* === Hero === */
.hero {
  position: relative;
  overflow: hidden;
  padding: 7rem 0 5rem;
  background: var(--navy);
  color: var(--text-inverse);
}

.hero-backdrop {
  position: absolute;
  inset: 0;
  background:
    radial-gradient(circle at 80% 20%, rgba(11, 143, 90, 0.45), transparent 45%),
    radial-gradient(circle at 10% 90%, rgba(245, 165, 36, 0.25), transparent 40%);
}

.hero-inner {
  position: relative;
  max-width: 900px;
  text-align: center;
}

.hero-eyebrow {
  display: inline-block;
  padding: 0.375rem 1rem;
  border-radius: 999px;
  background: rgba(255, 255, 255, 0.1);
  font-size: var(--text-sm);
  font-weight: 600;
  margin-bottom: 1.5rem;
}

.hero-title {
  font-size: var(--text-3xl);
  line-height: 1.1;
}

.hero-subtitle {
  margin-top: 1.25rem;
  font-size: var(--text-lg);
  color: rgba(248, 250, 252, 0.8);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
  margin-top: 2.5rem;
}

.hero .btn-outline {
  border-color: rgba(255, 255, 255, 0.6);
  color: #fff;
}

.hero .btn-outline:hover {
  background: rgba(255, 255, 255, 0.1);
}

.hero-stats {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
  gap: 1.5rem;
  margin-top: 4rem;
}

.hero-stat-value {
  font-size: var(--text-2xl);
  font-weight: 800;
  color: var(--amber);
}

.hero-stat-label {
  font-size: var(--text-sm);
  color: rgba(248, 250, 252, 0.7);
}

/* === Why Us === */
.stats-band {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
  gap: 1.5rem;
  margin-top: 3rem;
  padding: 2rem;
  border-radius: var(--radius-lg);
  background: var(--green);
  color: #fff;
  text-align: center;
}

.stat {
  display: flex;
  flex-direction: column;
}

.stat-value {
  font-size: var(--text-2xl);
  font-weight: 800;
}

.stat-label {
  font-size: var(--text-sm);
  opacity: 0.85;
}

/* === Pricing === */
.billing-toggle {
  display: flex;
  justify-content: center;
  gap: 0.25rem;
  width: fit-content;
  margin: 0 auto 2.5rem;
  padding: 0.25rem;
  border-radius: 999px;
  background: var(--surface-alt);
  border: 1px solid var(--border);
}

.billing-option {
  padding: 0.5rem 1.25rem;
  border: none;
  border-radius: 999px;
  background: transparent;
  font-family: inherit;
  font-weight: 600;
  color: var(--text-secondary);
  cursor: pointer;
}

.billing-option.active {
  background: var(--navy);
  color: #fff;
}

.pricing-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 1.5rem;
  align-items: stretch;
}

.pricing-card {
  position: relative;
}

.pricing-card.highlighted {
  border: 2px solid var(--green);
  box-shadow: var(--shadow-lg);
}

.pricing-badge {
  position: absolute;
  top: -0.875rem;
  inset-inline-start: 1.75rem;
  padding: 0.25rem 0.875rem;
  border-radius: 999px;
  background: var(--amber);
  color: var(--navy);
  font-size: var(--text-xs);
  font-weight: 700;
  text-transform: uppercase;
}

.pricing-amount {
  display: flex;
  align-items: baseline;
  gap: 0.25rem;
}

.pricing-value {
  font-size: var(--text-2xl);
  font-weight: 800;
  color: var(--navy);
}

.pricing-suffix {
  color: var(--text-muted);
}

.pricing-saving {
  width: fit-content;
  padding: 0.125rem 0.625rem;
  border-radius: 999px;
  background: var(--green-soft);
  color: var(--green-dark);
  font-size: var(--text-xs);
  font-weight: 700;
}

.pricing-cta {
  margin-top: auto;
}

/* === Journey === */
.journey-track {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 1.5rem;
  counter-reset: journey;
}

.journey-step {
  display: flex;
  gap: 1rem;
  padding: 1.5rem;
  border-radius: var(--radius);
  background: var(--surface);
  border: 1px solid var(--border);
}

.journey-number {
  flex-shrink: 0;
  font-size: var(--text-xl);
  font-weight: 800;
  color: var(--green);
}

.journey-title {
  font-size: var(--text-lg);
  color: var(--navy);
}

.journey-text {
  color: var(--text-secondary);
  margin: 0.375rem 0;
}

.journey-duration {
  font-size: var(--text-xs);
  font-weight: 700;
  color: var(--amber);
  text-transform: uppercase;
}

/* === Testimonials === */
.carousel {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.carousel-track {
  display: flex;
  gap: 1.5rem;
  overflow-x: auto;
  scroll-snap-type: x mandatory;
  scrollbar-width: none;
  padding: 1rem 0.25rem;
  flex: 1;
}

.carousel-track::-webkit-scrollbar {
  display: none;
}

.testimonial-card {
  flex: 0 0 336px;
  scroll-snap-align: start;
}

.rating {
  color: var(--amber);
  letter-spacing: 0.1em;
}

.rating-empty {
  color: var(--border);
}

.testimonial-text {
  color: var(--text-secondary);
  font-style: italic;
}

.testimonial-author {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-top: auto;
}

.avatar {
  width: 2.75rem;
  height: 2.75rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: var(--navy);
  color: #fff;
  font-weight: 700;
}

.author-name {
  display: block;
  color: var(--navy);
}

.author-byline {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

[dir="rtl"] .carousel-control {
  transform: scaleX(-1);
}

/* === FAQ === */
.accordion {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.accordion-item {
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--surface);
  overflow: hidden;
}

.accordion-item.open {
  border-color: var(--green);
}

.accordion-trigger {
  width: 100%;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 1.125rem 1.5rem;
  background: none;
  border: none;
  font-family: inherit;
  font-size: var(--text-base);
  font-weight: 600;
  color: var(--navy);
  text-align: start;
  cursor: pointer;
}

.accordion-icon {
  font-size: var(--text-xl);
  color: var(--green);
}

.accordion-panel {
  padding: 0 1.5rem 1.25rem;
  color: var(--text-secondary);
}

/* === Demo === */
.demo-inner {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
  align-items: center;
}

.demo-highlights {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.demo-highlight {
  display: flex;
  gap: 1rem;
}

.demo-check {
  flex-shrink: 0;
  width: 2rem;
  height: 2rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: var(--green-soft);
  color: var(--green);
  font-weight: 700;
}

.demo-highlight p {
  color: var(--text-secondary);
}

@media (max-width: 860px) {
  .demo-inner {
    grid-template-columns: 1fr;
  }
}

/* === CTA Banner === */
.cta-banner {
  padding: 4rem 0;
  background: linear-gradient(120deg, var(--green), var(--green-dark));
  color: #fff;
}

.cta-inner {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 2rem;
}

.cta-title {
  font-size: var(--text-2xl);
}

.cta-subtitle {
  opacity: 0.9;
  margin-top: 0.5rem;
}

/* === Projects === */
.projects-hero {
  padding: 6rem 0 3rem;
  background: var(--navy);
  color: var(--text-inverse);
  text-align: center;
}

.projects-hero-title {
  font-size: var(--text-3xl);
  line-height: 1.15;
}

.projects-hero-subtitle {
  margin-top: 1rem;
  color: rgba(248, 250, 252, 0.8);
}

.projects-total {
  margin-top: 1.5rem;
  font-weight: 700;
  color: var(--amber);
}

.projects-breakdown {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
  margin-top: 1.5rem;
}

.projects-breakdown-item {
  display: flex;
  gap: 0.5rem;
  padding: 0.375rem 1rem;
  border-radius: 999px;
  background: rgba(255, 255, 255, 0.08);
}

.breakdown-count {
  font-weight: 800;
}

.project-category {
  width: fit-content;
  font-size: var(--text-xs);
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.06em;
  color: var(--green);
}

.project-client {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.tech-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.375rem;
}

.tech-tag {
  padding: 0.125rem 0.625rem;
  border-radius: var(--radius-sm);
  background: var(--surface-alt);
  border: 1px solid var(--border);
  font-size: var(--text-xs);
  color: var(--text-secondary);
}

.case-study-title {
  font-size: var(--text-3xl);
  line-height: 1.15;
  color: var(--navy);
  margin: 0.5rem 0 1rem;
}

.case-study-summary {
  font-size: var(--text-lg);
  color: var(--text-secondary);
}

.case-study-facts {
  display: flex;
  gap: 3rem;
  margin: 2rem 0;
  padding: 1.25rem 0;
  border-top: 1px solid var(--border);
  border-bottom: 1px solid var(--border);
}

.case-study-facts dt {
  font-size: var(--text-xs);
  text-transform: uppercase;
  color: var(--text-muted);
}

.case-study-facts dd {
  font-weight: 600;
}

.case-study h2 {
  font-size: var(--text-xl);
  color: var(--navy);
  margin: 2rem 0 0.75rem;
}

.case-study-results {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.case-study-results li::before {
  content: "\2192  ";
  color: var(--green);
}

.back-link {
  margin-bottom: 1.5rem;
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: 2rem;
  align-items: start;
}

.contact-submit {
  width: 100%;
}

.contact-info {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.contact-info-title {
  font-size: var(--text-xl);
  color: var(--navy);
}

.contact-channels {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.contact-channel {
  display: flex;
  gap: 0.875rem;
  align-items: flex-start;
}

.channel-icon {
  font-size: var(--text-xl);
}

.channel-label {
  display: block;
  font-size: var(--text-xs);
  text-transform: uppercase;
  color: var(--text-muted);
}

.channel-value {
  font-weight: 600;
}

.contact-map iframe {
  width: 100%;
  height: 260px;
  border: 0;
  border-radius: var(--radius);
}

@media (max-width: 860px) {
  .contact-grid {
    grid-template-columns: 1fr;
  }
}

/* === Not Found === */
.not-found {
  text-align: center;
}

.not-found-code {
  display: block;
  font-size: 5rem;
  font-weight: 800;
  color: var(--green-soft);
  -webkit-text-stroke: 2px var(--green);
}

.not-found p {
  margin: 1rem 0 2rem;
  color: var(--text-secondary);
}
"#;
