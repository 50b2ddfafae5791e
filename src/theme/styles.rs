//! Global CSS styles for the portfolio.
//!
//! Night-sky palette: near-black background, white starlight and a warm
//! accent for links and highlights.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SKY (Backgrounds) */
  --sky-black: #05060a;
  --sky-deep: #0b0e1a;
  --sky-border: rgba(255, 255, 255, 0.08);

  /* STARLIGHT */
  --star-white: #ffffff;
  --star-glow: rgba(255, 255, 255, 0.35);

  /* ACCENT */
  --accent: #f5c16c;
  --accent-glow: rgba(245, 193, 108, 0.35);

  /* PLANETS */
  --mercury: #b7b2ad;
  --venus: #e8c07d;
  --earth: #4f8fd6;
  --mars: #d2603b;
  --jupiter: #d9a66c;

  /* TEXT */
  --text-primary: #f3f4f8;
  --text-secondary: rgba(243, 244, 248, 0.72);
  --text-muted: rgba(243, 244, 248, 0.5);

  /* Typography */
  --font-display: 'Cormorant Garamond', Georgia, serif;
  --font-body: 'Inter', system-ui, sans-serif;
  --font-hand: 'Caveat', 'Comic Sans MS', cursive;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 800ms cubic-bezier(0.2, 0.7, 0.2, 1);
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
  background: radial-gradient(ellipse at top, var(--sky-deep), var(--sky-black) 70%);
  color: var(--text-primary);
  font-family: var(--font-body);
  line-height: 1.6;
  min-height: 100vh;
  overflow-x: hidden;
  cursor: none;
}

a {
  color: var(--accent);
  text-decoration: none;
}

.visually-hidden {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0 0 0 0);
  white-space: nowrap;
}

/* === Opening Fade === */
.opening-fade {
  position: fixed;
  inset: 0;
  background: #000;
  z-index: 9999;
  pointer-events: none;
  transition: opacity 1.5s ease-out;
}

/* === Starfield === */
.stars-container {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
}

.star {
  opacity: 0.7;
  box-shadow: 0 0 4px var(--star-glow);
}

/* === Shooting Stars === */
.shooting-stars-container {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
}

.shooting-star {
  position: absolute;
  left: -10%;
  width: 120px;
  height: 2px;
  background: linear-gradient(90deg, var(--star-white), transparent);
  border-radius: 999px;
  opacity: 0;
  transform: translateX(0) rotate(-12deg);
}

.shooting-star.active {
  animation: shoot var(--star-duration, 1.5s) linear forwards;
}

@keyframes shoot {
  0% { opacity: 0; transform: translateX(0) rotate(-12deg); }
  10% { opacity: 1; }
  100% { opacity: 0; transform: translateX(130vw) rotate(-12deg); }
}

/* === Cursor === */
.shooting-star-cursor {
  position: fixed;
  width: 8px;
  height: 8px;
  margin: -4px 0 0 -4px;
  border-radius: 50%;
  background: var(--star-white);
  box-shadow: 0 0 12px 3px var(--star-glow);
  pointer-events: none;
  z-index: 900;
  transition: opacity var(--transition-normal);
}

.cursor-trail-svg {
  position: fixed;
  inset: 0;
  width: 100vw;
  height: 100vh;
  pointer-events: none;
  z-index: 899;
  transition: opacity var(--transition-normal);
}

.cursor-fog {
  position: fixed;
  width: 320px;
  height: 320px;
  margin: -160px 0 0 -160px;
  border-radius: 50%;
  background: radial-gradient(circle, rgba(255, 255, 255, 0.06), transparent 70%);
  pointer-events: none;
  z-index: 1;
  opacity: 0;
  transition: opacity 600ms ease;
}

.cursor-fog.active {
  opacity: 1;
}

/* === Hero === */
.hero-section {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  z-index: 2;
}

.hero-title {
  font-family: var(--font-display);
  font-size: clamp(3rem, 10vw, 7rem);
  font-weight: 500;
  letter-spacing: 0.04em;
}

.letter {
  display: inline-block;
  transition: transform 1.5s cubic-bezier(0.34, 1.56, 0.64, 1);
}

.letter.floating {
  transform: translateY(-0.35em) rotate(-4deg);
}

.letter.pulling {
  transform: translateY(-0.08em) rotate(3deg);
}

.hero-subtitle {
  margin-top: 1rem;
  color: var(--text-secondary);
  font-size: 1.1rem;
}

/* === Planets === */
.planets-container {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
  margin-top: 3rem;
  transition: opacity 500ms ease;
}

.planet {
  border: none;
  border-radius: 50%;
  width: 28px;
  height: 28px;
  margin: 0 0.75rem;
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.planet:hover,
.planet.active {
  transform: scale(1.3);
  box-shadow: 0 0 18px var(--accent-glow);
}

.planet-mercury { background: var(--mercury); }
.planet-venus { background: var(--venus); }
.planet-earth { background: var(--earth); }
.planet-mars { background: var(--mars); }
.planet-jupiter { background: var(--jupiter); width: 36px; height: 36px; }

.planets-legend {
  list-style: none;
  display: flex;
  gap: 1.25rem;
  color: var(--text-muted);
  font-size: 0.85rem;
}

.legend-item {
  display: flex;
  align-items: center;
  gap: 0.4rem;
}

.legend-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  margin: 0;
}

body.scrolled .planets-legend {
  opacity: 0;
}

/* === Sections === */
.portfolio {
  position: relative;
  z-index: 2;
}

.full-section {
  min-height: 100vh;
  max-width: 1100px;
  margin: 0 auto;
  padding: 6rem 2rem;
  opacity: 0;
  transform: translateY(40px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.full-section.visible {
  opacity: 1;
  transform: none;
}

.section-title {
  font-family: var(--font-display);
  font-size: 2.75rem;
  margin-bottom: 2rem;
}

/* Generic text and card reveal */
.scroll-animate,
.project-item-large,
.education-item-large,
.skill-category-large,
.experience-item-large,
.cert-item-large {
  opacity: 0;
  transform: translateY(20px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.scroll-animate.visible,
.project-item-large.visible,
.education-item-large.visible,
.skill-category-large.visible,
.experience-item-large.visible,
.cert-item-large.visible {
  opacity: 1;
  transform: none;
}

/* === About === */
.about-layout {
  display: grid;
  grid-template-columns: minmax(220px, 320px) 1fr;
  gap: 3rem;
  align-items: center;
}

.photo-column {
  position: relative;
}

.photo-frame {
  position: relative;
  width: 100%;
  aspect-ratio: 1;
  border-radius: 50%;
  overflow: hidden;
  border: 1px solid var(--sky-border);
  box-shadow: 0 0 40px var(--star-glow);
}

.photo-upload-label {
  display: block;
  width: 100%;
  height: 100%;
  cursor: pointer;
}

.photo-preview {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.photo-preview.active {
  opacity: 1;
}

.photo-overlay-large {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  width: 100%;
  height: 100%;
  color: var(--text-muted);
  background: rgba(255, 255, 255, 0.03);
}

.photo-overlay-icon {
  font-size: 3rem;
  line-height: 1;
}

.about-text-large {
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin-bottom: 1.5rem;
}

.resume-link {
  display: inline-block;
  border-bottom: 1px solid var(--accent);
}

/* === Arrow Callout === */
.arrow-callout {
  position: absolute;
  top: -2.5rem;
  right: -7rem;
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  color: var(--accent);
  opacity: 0;
  pointer-events: none;
  transition: opacity 600ms ease;
}

.arrow-callout.visible {
  opacity: 1;
}

.arrow-callout.visible.fading {
  opacity: 0;
}

.arrow-text {
  font-family: var(--font-hand);
  font-size: 1.6rem;
  min-height: 2rem;
  white-space: pre;
}

/* === Projects === */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: 1.5rem;
  margin-bottom: 3rem;
}

.project-item-large {
  padding: 1.75rem;
  border: 1px solid var(--sky-border);
  border-radius: 16px;
  background: rgba(255, 255, 255, 0.03);
}

.project-badge-large {
  display: inline-block;
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  font-size: 0.75rem;
  color: var(--sky-black);
  background: var(--accent);
  margin-bottom: 0.75rem;
}

.project-title-large {
  font-family: var(--font-display);
  font-size: 1.6rem;
  margin-bottom: 0.5rem;
}

.project-description-large {
  color: var(--text-secondary);
}

/* === Project Files === */
.upload-button {
  display: inline-block;
  padding: 0.6rem 1.25rem;
  border: 1px solid var(--accent);
  border-radius: 999px;
  color: var(--accent);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.upload-button:hover {
  background: var(--accent-glow);
}

.files-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  margin-top: 1.25rem;
}

.file-item {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 0.75rem 1rem;
  border: 1px solid var(--sky-border);
  border-radius: 12px;
  background: rgba(255, 255, 255, 0.04);
  backdrop-filter: blur(6px);
}

.file-icon {
  font-size: 1.5rem;
}

.file-info {
  flex: 1;
  min-width: 0;
}

.file-name {
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

.file-size {
  font-size: 0.8rem;
  color: var(--text-muted);
}

.file-remove {
  border: none;
  background: none;
  color: var(--text-muted);
  font-size: 1.5rem;
  line-height: 1;
  cursor: pointer;
  transition: color var(--transition-fast);
}

.file-remove:hover {
  color: var(--mars);
}

/* === Journey === */
.timeline-container {
  position: relative;
  height: 520px;
  margin-bottom: 3rem;
}

.timeline-svg {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  overflow: visible;
}

.timeline-path {
  stroke: var(--star-white);
  stroke-opacity: 0.5;
  stroke-width: 2;
  stroke-dasharray: 6 6;
}

.timeline-marker {
  position: absolute;
  transform: translate(-50%, -50%);
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.timeline-dot {
  width: 16px;
  height: 16px;
  border-radius: 50%;
  background: var(--accent);
  box-shadow: 0 0 14px var(--accent-glow);
}

.timeline-label {
  color: var(--text-secondary);
  white-space: nowrap;
}

.education-item-large,
.experience-item-large {
  padding: 1.25rem 0;
  border-bottom: 1px solid var(--sky-border);
}

.education-title-large,
.experience-title-large {
  font-size: 1.3rem;
}

.education-year-large,
.experience-description-large {
  color: var(--text-muted);
}

.journey-cards {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: 1.5rem;
  margin-top: 3rem;
  perspective: 1200px;
}

.journey-card {
  height: 220px;
  cursor: pointer;
}

.journey-card-inner {
  position: relative;
  width: 100%;
  height: 100%;
  transform-style: preserve-3d;
  transition: transform 700ms ease;
}

.journey-card.flipped .journey-card-inner {
  transform: rotateY(180deg);
}

.journey-card-front,
.journey-card-back {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  justify-content: center;
  padding: 1.5rem;
  border: 1px solid var(--sky-border);
  border-radius: 16px;
  background: rgba(255, 255, 255, 0.04);
  backface-visibility: hidden;
}

.journey-card-back {
  transform: rotateY(180deg);
}

.journey-card-hint {
  margin-top: 0.5rem;
  color: var(--text-muted);
  font-size: 0.85rem;
}

.typed-text {
  color: var(--text-secondary);
  min-height: 1.6em;
}

/* === Skills === */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 1.5rem;
}

.skill-category-title-large {
  font-size: 1.2rem;
  margin-bottom: 0.75rem;
}

.skill-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.skill-tag-large {
  padding: 0.25rem 0.75rem;
  border: 1px solid var(--sky-border);
  border-radius: 999px;
  font-size: 0.85rem;
}

.cert-item-large {
  margin-top: 2rem;
  color: var(--text-secondary);
}

/* === Contact === */
.contact-list {
  display: flex;
  flex-wrap: wrap;
  gap: 1.5rem;
}

.contact-item-large {
  font-size: 1.3rem;
}

/* === Small screens === */
@media (max-width: 720px) {
  body {
    cursor: auto;
  }

  .about-layout {
    grid-template-columns: 1fr;
  }

  .arrow-callout {
    right: 0;
  }

  .planets-legend {
    flex-wrap: wrap;
    justify-content: center;
  }
}

@media (prefers-reduced-motion: reduce) {
  .shooting-star.active,
  .letter {
    animation: none;
    transition: none;
  }
}
"#;
