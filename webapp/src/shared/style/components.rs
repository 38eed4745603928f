// header, buttons and the project modal/lightbox
pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-3) var(--space-6);
  border-radius: 999px;
  border: 1px solid transparent;
  font-weight: 600;
  cursor: pointer;
  transition: var(--transition);
}

.btn-primary {
  background-color: var(--color-primary);
  color: #fff;
}

.btn-secondary {
  background-color: transparent;
  border-color: var(--color-border);
  color: var(--color-text);
}

.btn:hover {
  transform: translateY(-2px);
  text-decoration: none;
}

/* Header */
.header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  z-index: 100;
  transition: var(--transition);
}

.header.scrolled {
  background-color: rgba(15, 23, 42, 0.92);
  box-shadow: var(--shadow);
  backdrop-filter: blur(8px);
}

.nav-container {
  display: flex;
  height: 100%;
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--color-text);
}

.nav-list {
  display: flex;
  gap: var(--space-6);
  list-style: none;
}

.nav-link {
  color: var(--color-text-muted);
  font-weight: 500;
}

.nav-link.active,
.nav-link:hover {
  color: var(--color-primary);
  text-decoration: none;
}

.hamburger {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
}

.hamburger span {
  width: 24px;
  height: 2px;
  background-color: var(--color-text);
  transition: var(--transition);
}

.hamburger.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.hamburger.active span:nth-child(2) { opacity: 0; }
.hamburger.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

@media (max-width: 768px) {
  .hamburger { display: flex; }

  .nav {
    position: fixed;
    top: var(--header-height);
    right: -100%;
    width: 70%;
    height: calc(100vh - var(--header-height));
    background-color: var(--color-surface);
    transition: var(--transition);
  }

  .nav.active { right: 0; }

  .nav-list {
    flex-direction: column;
    padding: var(--space-8);
  }
}

/* Modal */
.modal {
  position: fixed;
  inset: 0;
  z-index: 200;
  display: flex;
  align-items: center;
  justify-content: center;
  opacity: 0;
  visibility: hidden;
  transition: var(--transition);
}

.modal.active {
  opacity: 1;
  visibility: visible;
}

.modal-overlay {
  position: absolute;
  inset: 0;
  background-color: rgba(0, 0, 0, 0.7);
}

.modal-content {
  position: relative;
  width: min(900px, 92vw);
  max-height: 90vh;
  overflow-y: auto;
  background-color: var(--color-surface);
  border-radius: var(--radius);
  padding: var(--space-8);
}

.modal-close {
  position: absolute;
  top: var(--space-4);
  right: var(--space-4);
  background: none;
  border: none;
  color: var(--color-text);
  font-size: 1.75rem;
  cursor: pointer;
}

.modal-category {
  display: inline-block;
  margin-top: var(--space-2);
}

.modal-video-container iframe,
.modal-video-container video {
  width: 100%;
  aspect-ratio: 16 / 9;
  border: none;
  border-radius: var(--radius);
}

.modal-details {
  white-space: pre-wrap;
  color: var(--color-text-muted);
  margin: var(--space-6) 0;
}

.modal-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-3);
}

.modal-actions .no-resources {
  color: var(--color-text-muted);
  text-align: center;
  width: 100%;
}

/* Carousel */
.carousel {
  position: relative;
  overflow: hidden;
  border-radius: var(--radius);
  margin: var(--space-6) 0;
}

.carousel-track {
  display: flex;
  transition: transform 0.4s ease;
}

.carousel-slide {
  flex: 0 0 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 240px;
  background-color: var(--color-surface-raised);
}

.carousel-slide img {
  max-width: 100%;
  cursor: zoom-in;
}

.carousel-button {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  background-color: rgba(0, 0, 0, 0.5);
  color: #fff;
  border: none;
  border-radius: 50%;
  width: 36px;
  height: 36px;
  cursor: pointer;
}

.carousel-button.prev { left: var(--space-2); }
.carousel-button.next { right: var(--space-2); }
.carousel-button:disabled { opacity: 0.3; cursor: default; }

.carousel-pagination {
  position: absolute;
  bottom: var(--space-2);
  width: 100%;
  display: flex;
  justify-content: center;
  gap: var(--space-2);
}

.carousel-bullet {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  border: none;
  background-color: rgba(255, 255, 255, 0.5);
  cursor: pointer;
}

.carousel-bullet.active { background-color: var(--color-primary); }

/* Lightbox */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 300;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: rgba(0, 0, 0, 0.9);
  opacity: 0;
  visibility: hidden;
  transition: var(--transition);
}

.lightbox.active {
  opacity: 1;
  visibility: visible;
}

.lightbox img {
  max-width: 92vw;
  max-height: 90vh;
}

.lightbox-close {
  position: absolute;
  top: var(--space-4);
  right: var(--space-6);
  background: none;
  border: none;
  color: #fff;
  font-size: 2rem;
  cursor: pointer;
}
"#;

#[cfg(test)]
mod tests {
    use super::BASE_COMPONENTS;

    // formatted details indent their bullets with plain spaces
    #[test]
    fn details_keep_leading_spaces() {
        let rule = BASE_COMPONENTS
            .split(".modal-details {")
            .nth(1)
            .and_then(|rest| rest.split('}').next())
            .unwrap();
        assert!(rule.contains("white-space: pre-wrap;"));
    }
}
